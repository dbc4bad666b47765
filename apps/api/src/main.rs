mod config;
mod errors;
mod generation;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::generator::ContentService;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ExampleStore;

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

    info!("Starting Copydesk API v{}", env!("CARGO_PKG_VERSION"));

    // Open the example store (a corrupt file aborts startup)
    let store = ExampleStore::load(&config.store_path)?;
    let counts = store.stats();
    info!(
        "Example store ready at {} ({} examples across {} categories)",
        store.path().display(),
        counts.values().sum::<usize>(),
        counts.len()
    );

    // Tone fallback RNG: seeded runs repeat their random picks
    let service = match config.tone_seed {
        Some(seed) => {
            ContentService::with_rng(store, config.tone_fallback, StdRng::seed_from_u64(seed))
        }
        None => ContentService::new(store, config.tone_fallback),
    };
    info!("Content service initialized (tone fallback: {})", service.fallback());

    let state = AppState::new(service, config.clone());

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
