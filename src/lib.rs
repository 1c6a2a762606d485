pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod service;

pub use crate::config::AppConfig;
pub use error::{CalculatorError, Result};
pub use models::{CalculatorInput, CostBreakdown};
pub use service::{compute_landed_cost, QuoteService};
