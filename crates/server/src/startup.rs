use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::greeting::Greetings;
use service::reservations::{FileReservationStore, Instrumented, Reservations};
use service::seed;

use crate::routes::{self, ServerState};

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_config() -> anyhow::Result<configs::AppConfig> {
    let cfg = configs::AppConfig::load();
    cfg.validate()?;
    Ok(cfg)
}

/// Public entry: wire the reservation service and run its HTTP server.
/// Explicit construction order: store, seeding, service (decorated),
/// router — the listener binds only after the seed data is in place.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;

    let store = FileReservationStore::new(cfg.storage.data_path.clone()).await?;
    let inserted = seed::seed_reservations(store.as_ref()).await?;
    info!(inserted, "startup seeding complete");

    let state = ServerState { reservations: Arc::new(Instrumented::new(Reservations::new(store))) };
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting reservation server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: wire the greeting service and run its HTTP server.
pub async fn run_greeting() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;

    let greetings = Arc::new(Greetings::from_config(&cfg.greeting));
    let app: Router = routes::build_greeting_router(greetings, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.greeting.port).parse()?;
    info!(%addr, "starting greeting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
