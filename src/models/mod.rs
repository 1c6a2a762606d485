pub mod breakdown;
pub mod catalog;
pub mod input;
pub mod tariff;

pub use breakdown::CostBreakdown;
pub use catalog::{PriceTier, SkuPrice};
pub use input::{
    CalculatorInput, ChargeBasis, ChinaShipping, PackageDimensions, ShippingMode, TieredSchedule,
};
pub use tariff::{ResolvedTariff, TariffKind, TariffRate, TariffRates};
