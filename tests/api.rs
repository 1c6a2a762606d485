use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use landed_cost::api::{self, AppState, BatchQuoteResponse, QuoteResponse};
use landed_cost::config::CalculatorDefaults;
use landed_cost::models::{ResolvedTariff, ShippingMode, TariffKind};
use landed_cost::QuoteService;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn app() -> Router {
    api::router(AppState {
        quotes: Arc::new(QuoteService::in_memory(Duration::from_secs(60))),
        defaults: Arc::new(CalculatorDefaults::default()),
    })
}

fn scenario_a() -> Value {
    json!({
        "label": "offer-1",
        "unit_price_cny": "15.9",
        "quantity": 100,
        "china_shipping": { "type": "flat", "fee_cny": "50" },
        "package": { "length_cm": "22", "width_cm": "33", "height_cm": "1", "weight_kg": "0.2" }
    })
}

async fn post(uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn health_check() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn quote_uses_config_defaults() {
    let (status, body) = post("/api/quote", scenario_a()).await;
    assert_eq!(status, StatusCode::OK);

    let response: QuoteResponse = serde_json::from_slice(&body).unwrap();
    assert!(response.success);
    let breakdown = response.breakdown.unwrap();
    assert_eq!(breakdown.first_payment_krw.to_string(), "351156");
    assert_eq!(breakdown.total_cost_krw.to_string(), "553651");
    assert_eq!(breakdown.resolved_shipping_mode, ShippingMode::Lcl);
}

#[tokio::test]
async fn quote_with_fta_lookup_adds_certificate() {
    let mut body = scenario_a();
    body["tariff_rates"] = json!({
        "basic": { "rate": "8", "type_code": "A" },
        "fta_china": { "rate": "0", "type_code": "FCN1" }
    });
    let (status, body) = post("/api/quote", body).await;
    assert_eq!(status, StatusCode::OK);

    let breakdown = serde_json::from_slice::<QuoteResponse>(&body).unwrap().breakdown.unwrap();
    assert_eq!(breakdown.customs_duty_krw.to_string(), "0");
    assert_eq!(breakdown.origin_certificate_fee_krw.to_string(), "30000");
    assert_eq!(breakdown.origin_certificate_vat_krw.to_string(), "3000");
}

#[tokio::test]
async fn fcl_without_fee_is_bad_request() {
    let mut body = scenario_a();
    body["shipping_mode"] = json!("FCL");
    let (status, body) = post("/api/quote", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: QuoteResponse = serde_json::from_slice(&body).unwrap();
    assert!(!response.success);
    assert!(response.breakdown.is_none());
    assert!(response.message.contains("fcl_flat_fee_krw"));
}

#[tokio::test]
async fn batch_reports_each_item() {
    let mut bad = scenario_a();
    bad["quantity"] = json!(0);
    let (status, body) = post("/api/quote/batch", json!({ "items": [scenario_a(), bad] })).await;
    assert_eq!(status, StatusCode::OK);

    let response: BatchQuoteResponse = serde_json::from_slice(&body).unwrap();
    assert!(!response.success);
    assert_eq!(response.message, "Quoted 1 of 2 items");
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].index, 0);
    assert!(response.results[0].breakdown.is_some());
    assert!(response.results[1].error.as_deref().unwrap().contains("quantity"));
}

#[tokio::test]
async fn batch_csv_skips_rejected_items() {
    let mut second = scenario_a();
    second["label"] = json!(null);
    second["quantity"] = json!(200);
    let mut bad = scenario_a();
    bad["quantity"] = json!(0);

    let (status, body) = post("/api/quote/batch/csv", json!({ "items": [scenario_a(), second, bad] })).await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(body).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("label,"));
    assert!(lines[1].starts_with("offer-1,3227,"));
    assert!(lines[2].starts_with("item-2,3227,645400,"));
}

#[tokio::test]
async fn tariff_resolution_endpoint() {
    let (status, body) = post(
        "/api/tariff/resolve",
        json!({ "basic": { "rate": "8", "type_code": "A" }, "wto": { "rate": "6.5", "type_code": "C" } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let resolved: ResolvedTariff = serde_json::from_slice(&body).unwrap();
    assert_eq!(resolved.kind, TariffKind::Wto);
    assert_eq!(resolved.rate_percent.to_string(), "6.5");
    assert!(!resolved.origin_certificate_required);

    let (_, body) = post("/api/tariff/resolve", json!({})).await;
    let resolved: ResolvedTariff = serde_json::from_slice(&body).unwrap();
    assert_eq!(resolved.kind, TariffKind::Fallback);
    assert_eq!(resolved.rate_percent.to_string(), "8");
}
