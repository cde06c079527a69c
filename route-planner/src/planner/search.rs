//! Depth-first route enumeration.
//!
//! Finds every simple path from an origin to a destination by exploring
//! outgoing segments in network order, then filters and ranks the result.

use tracing::{debug, trace};

use crate::domain::{Network, Route, Segment, StationId};

use super::config::SearchConfig;
use super::rank::{rank_by, rank_routes, remove_disrupted};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is not a station of the network
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Enumerate every route from `current` to `destination`.
///
/// Stations in `visited` are never entered. Outgoing segments are tried in
/// network order and segments on suspended lines are skipped. Routes are
/// returned in enumeration order: all routes through the first usable
/// segment, then all routes through the second, and so on. No disruption
/// filtering or sorting is applied.
///
/// Reaching the destination yields the empty route, so searching from a
/// station to itself returns exactly one empty route. An unreachable
/// destination yields no routes.
///
/// The output is exponential in the worst case; this is meant for small
/// networks.
pub fn find_routes<'a>(
    network: &'a Network,
    current: StationId,
    destination: StationId,
    visited: &[StationId],
) -> Vec<Route<'a>> {
    let mut explorer = Explorer::new(network, destination, visited);
    explorer.explore(current);

    debug!(
        origin = %network.station_name(current),
        destination = %network.station_name(destination),
        routes = explorer.routes.len(),
        "route enumeration complete"
    );

    explorer.routes
}

/// All usable routes from `origin` to `destination`, shortest first.
pub fn routes_from<'a>(
    network: &'a Network,
    origin: StationId,
    destination: StationId,
) -> Vec<Route<'a>> {
    routes_from_by(network, origin, destination, Route::duration)
}

/// All usable routes from `origin` to `destination`, ordered by `cost`.
///
/// Routes whose first station is closed are dropped, then the rest are
/// stable-sorted by `cost` (evaluated once per route), so equal-cost routes
/// stay in enumeration order.
pub fn routes_from_by<'a, K, F>(
    network: &'a Network,
    origin: StationId,
    destination: StationId,
    cost: F,
) -> Vec<Route<'a>>
where
    K: Ord,
    F: FnMut(&Route<'a>) -> K,
{
    let routes = find_routes(network, origin, destination, &[]);
    rank_by(remove_disrupted(routes), cost)
}

/// DFS state shared across the recursion.
struct Explorer<'a> {
    network: &'a Network,
    destination: StationId,
    /// Indexed by station; set for stations already departed from.
    visited: Vec<bool>,
    /// Segments taken from the origin to the current station.
    path: Vec<Segment>,
    routes: Vec<Route<'a>>,
}

impl<'a> Explorer<'a> {
    fn new(network: &'a Network, destination: StationId, visited: &[StationId]) -> Self {
        let mut flags = vec![false; network.station_count()];
        for id in visited {
            if let Some(slot) = flags.get_mut(id.index()) {
                *slot = true;
            }
        }

        Self {
            network,
            destination,
            visited: flags,
            path: Vec::new(),
            routes: Vec::new(),
        }
    }

    fn explore(&mut self, current: StationId) {
        if current == self.destination {
            self.routes
                .push(Route::from_chain(self.network, self.path.clone()));
            return;
        }

        // `current` counts as visited for its own candidates, so self-loops
        // are never taken.
        let was_visited = self.set_visited(current, true);
        let candidates: Vec<Segment> = self
            .network
            .outgoing(current)
            .filter(|s| !self.is_visited(s.end()) && !self.network.is_suspended(s.line()))
            .copied()
            .collect();

        if candidates.is_empty() {
            trace!(station = %self.network.station_name(current), "dead end");
            self.set_visited(current, was_visited);
            return;
        }

        for segment in candidates {
            self.path.push(segment);
            self.explore(segment.end());
            self.path.pop();
        }
        self.set_visited(current, was_visited);
    }

    fn is_visited(&self, id: StationId) -> bool {
        self.visited.get(id.index()).copied().unwrap_or(false)
    }

    /// Set the visited flag, returning its previous value.
    fn set_visited(&mut self, id: StationId, value: bool) -> bool {
        match self.visited.get_mut(id.index()) {
            Some(slot) => std::mem::replace(slot, value),
            None => false,
        }
    }
}

/// Request for route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the journey starts.
    pub origin: StationId,

    /// Where the journey ends.
    pub destination: StationId,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: StationId, destination: StationId) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Validate the search request against a network.
    pub fn validate(&self, network: &Network) -> Result<(), SearchError> {
        for id in [self.origin, self.destination] {
            if network.station(id).is_none() {
                return Err(SearchError::UnknownStation(id));
            }
        }
        Ok(())
    }
}

/// Result of route search.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// Found routes, ranked best-first.
    pub routes: Vec<Route<'a>>,

    /// Number of routes enumerated before filtering.
    pub routes_explored: usize,

    /// Number of routes dropped because their first station is closed.
    pub routes_disrupted: usize,
}

impl SearchResult<'_> {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            routes_explored: 0,
            routes_disrupted: 0,
        }
    }
}

/// Route planner over one network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Search for routes, ranked by the configured objective.
    ///
    /// At most `max_results` routes are returned.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult<'a>, SearchError> {
        request.validate(self.network)?;

        let routes = find_routes(self.network, request.origin, request.destination, &[]);
        let routes_explored = routes.len();

        let routes = remove_disrupted(routes);
        let routes_disrupted = routes_explored - routes.len();

        let mut routes = rank_routes(routes, self.config.objective);
        routes.truncate(self.config.max_results);

        debug!(
            explored = routes_explored,
            disrupted = routes_disrupted,
            returned = routes.len(),
            objective = ?self.config.objective,
            "route search complete"
        );

        Ok(SearchResult {
            routes,
            routes_explored,
            routes_disrupted,
        })
    }
}
