//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};

use crate::domain::{DomainError, Network};
use crate::loader::NetworkFile;
use crate::planner::{Planner, SearchConfig, SearchError, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network))
        .route("/routes", get(plan_routes))
        .route("/stations/:name/close", post(close_station))
        .route("/stations/:name/open", post(open_station))
        .route("/lines/:name/suspend", post(suspend_line))
        .route("/lines/:name/resume", post(resume_line))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current network, in network file form.
async fn network(State(state): State<AppState>) -> Json<NetworkFile> {
    let network = state.network.read().await;
    Json(NetworkFile::from_network(&network))
}

/// Plan routes between two named stations.
async fn plan_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let config = request_config(&state.config, &req)?;

    // Held for the whole search so toggles cannot interleave
    let network = state.network.read().await;
    let origin = station_id(&network, &req.from)?;
    let destination = station_id(&network, &req.to)?;

    let planner = Planner::new(&network, &config);
    let result = planner.search(&SearchRequest::new(origin, destination))?;

    info!(
        from = %req.from,
        to = %req.to,
        objective = ?config.objective,
        routes = result.routes.len(),
        "planned routes"
    );

    Ok(Json(RoutesResponse::from_result(
        req.from,
        req.to,
        config.objective,
        &result,
    )))
}

/// Apply per-request overrides to the server configuration.
///
/// The request may lower the result limit but never raise it.
fn request_config(base: &SearchConfig, req: &RoutesRequest) -> Result<SearchConfig, SearchError> {
    let mut config = base.clone();
    if let Some(objective) = req.optimise {
        config = config.with_objective(objective);
    }
    match req.limit {
        Some(0) => {
            return Err(SearchError::InvalidRequest(
                "limit must be at least 1".to_string(),
            ));
        }
        Some(limit) => config.max_results = limit.min(base.max_results),
        None => {}
    }
    Ok(config)
}

async fn close_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationStatus>, AppError> {
    set_station_closed(&state, &name, true).await
}

async fn open_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationStatus>, AppError> {
    set_station_closed(&state, &name, false).await
}

async fn suspend_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LineStatus>, AppError> {
    set_line_suspended(&state, &name, true).await
}

async fn resume_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LineStatus>, AppError> {
    set_line_suspended(&state, &name, false).await
}

async fn set_station_closed(
    state: &AppState,
    name: &str,
    closed: bool,
) -> Result<Json<StationStatus>, AppError> {
    let mut network = state.network.write().await;
    let id = station_id(&network, name)?;

    if closed {
        network.close_station(id)?;
    } else {
        network.open_station(id)?;
    }
    info!(station = %name, closed, "station status changed");

    Ok(Json(StationStatus {
        name: name.to_string(),
        closed: network.is_closed(id),
    }))
}

async fn set_line_suspended(
    state: &AppState,
    name: &str,
    suspended: bool,
) -> Result<Json<LineStatus>, AppError> {
    let mut network = state.network.write().await;
    let id = network
        .line_id(name)
        .ok_or_else(|| DomainError::UnknownLineName(name.to_string()))?;

    if suspended {
        network.suspend_line(id)?;
    } else {
        network.resume_line(id)?;
    }
    info!(line = %name, suspended, "line status changed");

    Ok(Json(LineStatus {
        name: name.to_string(),
        suspended: network.is_suspended(id),
    }))
}

fn station_id(network: &Network, name: &str) -> Result<crate::domain::StationId, DomainError> {
    network
        .station_id(name)
        .ok_or_else(|| DomainError::UnknownStationName(name.to_string()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
            SearchError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnknownStation(_)
            | DomainError::UnknownLine(_)
            | DomainError::UnknownStationName(_)
            | DomainError::UnknownLineName(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, "{message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
