use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use schedule_server::config::ServerConfig;
use schedule_server::store::ScheduleStore;
use schedule_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load schedules (missing files start empty; malformed ones follow the policy)
    let store = ScheduleStore::load(
        &config.trains_file,
        &config.stations_file,
        config.load_policy,
    )?;
    info!(
        trains = store.train_count(),
        stations = store.station_count(),
        "schedule store ready"
    );

    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Train schedule service listening on http://{}", config.bind_addr);
    info!("  GET  /stations             - List stations");
    info!("  GET  /stations/{{name}}      - Station timetable");
    info!("  POST /stations/{{name}}      - Add or update a train at a station");
    info!("  GET  /trains               - List trains");
    info!("  GET  /trains/{{train_id}}    - Train route");
    info!("  POST /trains               - Add a train");
    info!("  GET  /search?from_station=&to_station= - Point-to-point search");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until killed.
        std::future::pending::<()>().await;
    }
}
