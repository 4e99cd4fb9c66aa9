mod api;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use axum::routing::get;
use busline::prelude::*;
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/search_buses", get(api::search_buses))
        .route("/bus_location", get(api::bus_location))
        .route("/bus_stops", get(api::bus_stops))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = Config::from_env();

    info!("Loading fleet...");
    let now = Instant::now();
    let fleet = match &config.fleet_path {
        Some(path) => {
            let path = match path.canonicalize() {
                Ok(path) => path,
                Err(err) => {
                    error!("Fleet archive {} is not readable: {err}", path.display());
                    std::process::exit(1);
                }
            };
            info!("Using fleet archive {}", path.display());
            Fleet::new(fleet::Config::default()).from_zip(path)
        }
        None => {
            info!("No fleet archive given, using the demo fleet");
            fleet::demo()
        }
    };
    let registry = match Registry::new().with_fleet(fleet) {
        Ok(registry) => registry,
        Err(err) => {
            error!("Failed to load fleet: {err}");
            std::process::exit(1);
        }
    };
    info!("Loading fleet took {:?}", now.elapsed());

    let jitter: Box<dyn Jitter> = match config.jitter_seed {
        Some(seed) => {
            info!("Simulating movement with seed {seed}");
            Box::new(SeededJitter::new(seed))
        }
        None => Box::new(RandomJitter),
    };
    let state = Arc::new(AppState::new(registry, jitter, Box::new(SystemClock)));

    let app = router(state);
    let address = config.address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {address}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening on {address}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
