use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tube_server::config::GatewayConfig;
use tube_server::gateway::Gateway;
use tube_server::matching::NameResolver;
use tube_server::stations::{StationNames, StationStore, load_seed_script};
use tube_server::tfl::TflClient;
use tube_server::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "tube_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env()?;

    let store = StationStore::connect(&config.database_url).await?;

    // A failed seed leaves whatever the database already holds
    match load_seed_script(config.stations_sql.as_deref()) {
        Ok(script) => {
            if let Err(e) = store.bootstrap(&script).await {
                tracing::warn!(error = %e, "station seed failed");
            }
        }
        Err(e) => tracing::warn!(error = %e, "station seed unavailable"),
    }

    let station_names = StationNames::load(&store).await?;
    let count = station_names.len().await;
    tracing::info!(count, "loaded station names");

    let client = TflClient::new(config.tfl.clone())?;
    let gateway = Arc::new(Gateway::new(
        NameResolver::new(station_names),
        store,
        Arc::new(client),
    ));

    if let Some(period) = config.station_reload {
        let gateway = Arc::clone(&gateway);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match gateway.reload_stations().await {
                    Ok(count) => tracing::info!(count, "reloaded station names"),
                    Err(e) => tracing::warn!(error = %e, "failed to reload station names"),
                }
            }
        });
    }

    let app = create_router(AppState { gateway });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "tube gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
