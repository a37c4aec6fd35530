mod config;
mod errors;
mod filters;
mod llm_client;
mod mapper;
mod presenter;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionService, GeminiClient};
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log filter default is available
    let config = Config::from_env()?;

    // Initialize structured logging
    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Atlas API v{}", env!("CARGO_PKG_VERSION"));

    // Completion backend is optional: without a credential the catalog and
    // landing surfaces still work, and every generate fails fast.
    let completion: Option<Arc<dyn CompletionService>> = match config.gemini_api_key.clone() {
        Some(key) => {
            info!("Completion client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(GeminiClient::new(key)))
        }
        None => {
            warn!("GEMINI_API_KEY not found in secrets file or environment; generation disabled");
            None
        }
    };

    let state = AppState {
        sessions: SessionStore::new(),
        completion,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
