//! Route ranking and disruption filtering for search results.

use crate::domain::Route;

use super::config::Objective;

/// Remove routes that cannot be started because of a closure.
///
/// Only the very first station of each route is checked. A route that
/// passes through (or ends at) a closed station is kept: the closure stops
/// the journey from starting, it does not block trains running through.
/// The empty route has no first station and is always kept.
pub fn remove_disrupted(routes: Vec<Route<'_>>) -> Vec<Route<'_>> {
    routes
        .into_iter()
        .filter(|route| {
            route
                .origin()
                .is_none_or(|origin| !route.network().is_closed(origin))
        })
        .collect()
}

/// Stable sort by a caller-supplied cost.
///
/// The cost is evaluated exactly once per route. Routes with equal cost
/// keep their incoming (enumeration) order.
pub fn rank_by<'a, K, F>(mut routes: Vec<Route<'a>>, cost: F) -> Vec<Route<'a>>
where
    K: Ord,
    F: FnMut(&Route<'a>) -> K,
{
    routes.sort_by_cached_key(cost);
    routes
}

/// Rank routes by preference.
///
/// - `Duration`: total travel time
/// - `Changes`: number of changes, then travel time
/// - `Stops`: number of segments, then travel time
///
/// Returns routes sorted best-first; ties keep their incoming order.
pub fn rank_routes(routes: Vec<Route<'_>>, objective: Objective) -> Vec<Route<'_>> {
    match objective {
        Objective::Duration => rank_by(routes, Route::duration),
        Objective::Changes => rank_by(routes, |r| (r.num_changes(), r.duration())),
        Objective::Stops => rank_by(routes, |r| (r.segment_count(), r.duration())),
    }
}
