use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_planner::domain::Network;
use route_planner::loader::load_network;
use route_planner::planner::SearchConfig;
use route_planner::sample::london_underground;
use route_planner::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let network = match load() {
        Ok(network) => network,
        Err(message) => {
            error!("{message}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        stations = network.station_count(),
        lines = network.line_count(),
        segments = network.segments().len(),
        "network loaded"
    );

    let addr = std::env::var("ROUTE_PLANNER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = match addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(%addr, "invalid listen address: {e}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(network, SearchConfig::default());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Route planner listening on http://{addr}");
    info!("  GET  /health");
    info!("  GET  /network");
    info!("  GET  /routes?from=..&to=..&optimise=duration|changes|stops");
    info!("  POST /stations/:name/close, /stations/:name/open");
    info!("  POST /lines/:name/suspend, /lines/:name/resume");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Load the configured network file, or the built-in sample.
fn load() -> Result<Network, String> {
    match std::env::var("ROUTE_PLANNER_NETWORK") {
        Ok(path) => {
            info!(%path, "loading network file");
            load_network(&path).map_err(|e| e.to_string())
        }
        Err(_) => {
            info!("ROUTE_PLANNER_NETWORK not set, using the sample network");
            london_underground().map_err(|e| e.to_string())
        }
    }
}
