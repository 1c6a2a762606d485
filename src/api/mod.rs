pub mod handlers;
pub mod request;

pub use handlers::*;
pub use request::QuoteRequest;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::config::CalculatorDefaults;
use crate::service::QuoteService;

/// Shared state: quote service plus request defaults
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteService>,
    pub defaults: Arc<CalculatorDefaults>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/quote", post(quote))
        .route("/api/quote/batch", post(quote_batch))
        .route("/api/quote/batch/csv", post(quote_batch_csv))
        .route("/api/tariff/resolve", post(resolve_tariff_rate))
        .with_state(state)
}
