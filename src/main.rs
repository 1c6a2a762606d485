use landed_cost::{api, AppConfig, QuoteService};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // init logging, local time
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // load config
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // quote service with in-memory cache
    let state = api::AppState {
        quotes: Arc::new(QuoteService::in_memory(config.cache.ttl())),
        defaults: Arc::new(config.calculator.clone()),
    };

    // build router
    let app = api::router(state).layer(ServiceBuilder::new());

    // start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/quote            - landed cost for one order");
    info!("  POST /api/quote/batch      - several orders at once");
    info!("  POST /api/quote/batch/csv  - batch exported as CSV");
    info!("  POST /api/tariff/resolve   - lowest applicable duty rate");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
