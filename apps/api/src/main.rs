use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prep_api::config::Config;
use prep_api::llm_client::RelayMode;
use prep_api::relay::Relay;
use prep_api::routes::build_router;
use prep_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing credential, before anything binds)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "prep_relay={level},prep_api={level},tower_http={level}",
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting prep relay v{}", env!("CARGO_PKG_VERSION"));

    // Provider selection happens exactly once, here
    let relay = Relay::from_config(&config)?;
    match relay.mode() {
        RelayMode::Live(provider) => {
            info!("Mode: {} (model: {})", relay.mode().label(), provider.model())
        }
        RelayMode::Mock => warn!(
            "Mode: {} (credential matches neither 'sk-' nor 'gsk_'; serving canned answers)",
            relay.mode().label()
        ),
    }

    let state = AppState { relay };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
