//! Route planner using exhaustive depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "which ways are there from here to there, and which is best?"
//!
//! Every simple path between the two stations is enumerated, routes that
//! cannot start because their first station is closed are dropped, and the
//! rest are ranked by a cost function (total travel time by default).

mod config;
mod rank;
mod search;


pub use config::{Objective, SearchConfig};
pub use rank::{rank_by, rank_routes, remove_disrupted};
pub use search::{
    Planner, SearchError, SearchRequest, SearchResult, find_routes, routes_from, routes_from_by,
};
