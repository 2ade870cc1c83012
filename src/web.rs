use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::AppConfig;

/// Build the application with its middleware stack.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the configured port and serve until the process is stopped.
pub async fn run(config: AppConfig) -> Result<()> {
    let state = AppState::new(&config).context("Failed to build upstream clients")?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Weather server running at http://localhost:{}", config.port);

    axum::serve(listener, app(state))
        .await
        .context("Server error")
}
