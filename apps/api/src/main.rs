mod chat;
mod config;
mod errors;
mod models;
mod profile;
mod reports;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::LangflowClient;
use crate::config::Config;
use crate::profile::store::ProfileStore;
use crate::reports::VedicAstroClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting astro-api v{}", env!("CARGO_PKG_VERSION"));

    match &config.astra {
        Some(astra) => warn!(
            "Astra DB credentials found for {} (client {}, secret {}); no route uses the database",
            astra.url,
            astra.client_id,
            if astra.secret.is_empty() { "empty" } else { "set" }
        ),
        None => info!("Astra DB credentials not configured"),
    }

    let store = ProfileStore::open(&config.data_dir).await?;

    let reports = Arc::new(VedicAstroClient::new(config.report_api_key.clone()));
    let chat = Arc::new(LangflowClient::new(&config.flow));
    info!("Chat flow endpoint: {}", config.flow.run_url());

    let state = AppState {
        store,
        reports,
        chat,
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
