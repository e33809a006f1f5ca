use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use leadqualify::config::AppConfig;
use leadqualify::handlers;
use leadqualify::services::relay::http::HttpWebhookSink;
use leadqualify::services::relay::WebhookSink;
use leadqualify::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let webhook: Option<Arc<dyn WebhookSink>> = if config.webhook_url.is_empty() {
        tracing::info!("no WEBHOOK_URL configured, relay disabled");
        None
    } else {
        tracing::info!(url = %config.webhook_url, "relaying qualifications to webhook");
        Some(Arc::new(HttpWebhookSink::new(config.webhook_url.clone())))
    };

    let state = Arc::new(AppState { config: config.clone(), webhook });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/qualify", post(handlers::qualify::qualify_lead))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
