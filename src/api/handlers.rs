use crate::api::{AppState, QuoteRequest};
use crate::export;
use crate::models::{CostBreakdown, ResolvedTariff, TariffRates};
use crate::service::resolve_tariff;
use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body: several calculator forms
#[derive(Debug, Deserialize)]
pub struct BatchQuoteRequest {
    pub items: Vec<QuoteRequest>,
}

/// Response body
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub message: String,
    pub breakdown: Option<CostBreakdown>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchQuoteResponse {
    pub success: bool,
    pub message: String,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<BatchQuoteResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchQuoteResult {
    pub index: usize,
    pub label: Option<String>,
    pub breakdown: Option<CostBreakdown>,
    pub error: Option<String>,
}

/// Health check
pub async fn health_check() -> &'static str {
    "OK"
}

/// Single quote
pub async fn quote(State(state): State<AppState>, Json(req): Json<QuoteRequest>) -> Response {
    let label = req.label.clone();
    let input = req.into_input(&state.defaults);

    match state.quotes.quote(&input) {
        Ok(breakdown) => {
            let response = QuoteResponse {
                success: true,
                message: format!(
                    "Total {} KRW ({} KRW per unit, {})",
                    breakdown.total_cost_krw, breakdown.unit_cost_krw, breakdown.resolved_shipping_mode
                ),
                breakdown: Some(breakdown),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::warn!("Quote {:?} rejected: {}", label, e);
            let response = QuoteResponse {
                success: false,
                message: format!("Error: {}", e),
                breakdown: None,
            };
            (StatusCode::BAD_REQUEST, Json(response)).into_response()
        }
    }
}

fn run_batch(state: &AppState, req: BatchQuoteRequest) -> Vec<BatchQuoteResult> {
    let labels: Vec<Option<String>> = req.items.iter().map(|item| item.label.clone()).collect();
    let inputs: Vec<_> = req
        .items
        .into_iter()
        .map(|item| item.into_input(&state.defaults))
        .collect();

    state
        .quotes
        .quote_batch(&inputs)
        .into_iter()
        .zip(labels)
        .enumerate()
        .map(|(index, (result, label))| match result {
            Ok(breakdown) => BatchQuoteResult { index, label, breakdown: Some(breakdown), error: None },
            Err(e) => BatchQuoteResult { index, label, breakdown: None, error: Some(e.to_string()) },
        })
        .collect()
}

/// Batch quote; each item succeeds or fails on its own
pub async fn quote_batch(State(state): State<AppState>, Json(req): Json<BatchQuoteRequest>) -> Response {
    let total = req.items.len();
    let results = run_batch(&state, req);
    let ok = results.iter().filter(|r| r.breakdown.is_some()).count();

    let response = BatchQuoteResponse {
        success: ok == total,
        message: format!("Quoted {} of {} items", ok, total),
        generated_at: Utc::now(),
        results,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Batch quote exported as CSV; rejected items are left out
pub async fn quote_batch_csv(State(state): State<AppState>, Json(req): Json<BatchQuoteRequest>) -> Response {
    let rows: Vec<(String, CostBreakdown)> = run_batch(&state, req)
        .into_iter()
        .filter_map(|r| {
            let label = r.label.unwrap_or_else(|| format!("item-{}", r.index + 1));
            r.breakdown.map(|b| (label, b))
        })
        .collect();

    let mut body = Vec::new();
    match export::write_csv(&rows, &mut body) {
        Ok(()) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body).into_response(),
        Err(e) => {
            tracing::error!("CSV export failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response()
        }
    }
}

/// Pick the applicable duty rate from a lookup result
pub async fn resolve_tariff_rate(
    State(state): State<AppState>,
    Json(rates): Json<TariffRates>,
) -> Json<ResolvedTariff> {
    Json(resolve_tariff(&rates, &state.defaults.tariff_policy()))
}
