//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Calling, Network, Route, display_all_routes};
use crate::planner::{Objective, SearchResult};

/// Request to plan routes between two stations.
#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Ordering to apply (defaults to the server configuration)
    pub optimise: Option<Objective>,

    /// Maximum number of routes (capped by the server configuration)
    pub limit: Option<usize>,
}

/// A calling: one contiguous run on a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallingResult {
    pub from: String,
    pub to: String,
    pub line: String,
}

/// A route in planning results.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    /// Rendered text, as shown to passengers
    pub description: String,

    /// Total travel time on active lines
    pub duration_mins: u64,

    /// Number of changes
    pub changes: usize,

    /// Every station passed, origin first
    pub stations: Vec<String>,

    /// Collapsed callings
    pub callings: Vec<CallingResult>,
}

/// Response to a routes request.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub from: String,
    pub to: String,
    pub objective: Objective,

    /// Routes, best first
    pub routes: Vec<RouteResult>,

    /// All routes rendered one per block
    pub summary: String,

    /// Routes enumerated before filtering
    pub routes_explored: usize,

    /// Routes removed because their first station is closed
    pub routes_disrupted: usize,
}

/// Current state of a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStatus {
    pub name: String,
    pub closed: bool,
}

/// Current state of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineStatus {
    pub name: String,
    pub suspended: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CallingResult {
    /// Create from a domain Calling.
    pub fn from_calling(calling: &Calling, network: &Network) -> Self {
        Self {
            from: network.station_name(calling.from).to_string(),
            to: network.station_name(calling.to).to_string(),
            line: network.line_name(calling.line).to_string(),
        }
    }
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route<'_>) -> Self {
        let network = route.network();

        Self {
            description: route.to_string(),
            duration_mins: route.duration(),
            changes: route.num_changes(),
            stations: route
                .stations()
                .map(|s| network.station_name(s).to_string())
                .collect(),
            callings: route
                .callings()
                .iter()
                .map(|c| CallingResult::from_calling(c, network))
                .collect(),
        }
    }
}

impl RoutesResponse {
    /// Create from a search result.
    pub fn from_result(
        from: String,
        to: String,
        objective: Objective,
        result: &SearchResult<'_>,
    ) -> Self {
        Self {
            from,
            to,
            objective,
            routes: result.routes.iter().map(RouteResult::from_route).collect(),
            summary: display_all_routes(&result.routes),
            routes_explored: result.routes_explored,
            routes_disrupted: result.routes_disrupted,
        }
    }
}
