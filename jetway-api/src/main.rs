use std::net::SocketAddr;

use anyhow::Context;
use jetway_api::{app, AppState};
use jetway_order::ReservationRegistry;
use jetway_store::{seed_sample_flights, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jetway_api=debug,jetway_order=info,jetway_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Jetway API on port {}", config.server.port);

    let registry = ReservationRegistry::new();
    if config.seed.enabled {
        seed_sample_flights(&registry, chrono::Utc::now(), config.seed.dated_days);
    }

    let app = app(AppState::new(registry));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
