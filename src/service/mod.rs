pub mod calculator;
pub mod pricing;
pub mod quote;
pub mod rounding;
pub mod shipping;
pub mod tariff;

pub use calculator::{compute_landed_cost, validate};
pub use pricing::price_for_quantity;
pub use quote::{QuoteCache, QuoteService};
pub use shipping::shipping_units_for;
pub use tariff::{resolve_tariff, TariffPolicy};
