mod catalog;
mod config;
mod document;
mod errors;
mod export;
mod layout;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Catalog: {} templates in {} categories",
        Catalog::all().len(),
        Catalog::categories().len() - 1
    );
    info!(
        "Page {:?}, export at {}x ({:?})",
        config.page_format, config.export_scale, config.export_pagination
    );
    if let Some(dir) = &config.export_dir {
        info!("Exports will also be saved to {}", dir.display());
    }

    // Build app state (export fonts are loaded lazily on first export)
    let state = AppState::new(config.clone());

    // Discard sessions abandoned by their clients
    session::spawn_idle_sweeper(state.sessions.clone(), config.session_ttl);
    info!("Idle sessions expire after {}s", config.session_ttl.as_secs());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
