//! Domain types for the route planner.
//!
//! This module contains the network model: stations, lines and segments
//! held in a [`Network`] registry, and the [`Route`] type produced by the
//! search. Types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod error;
mod line;
mod network;
mod route;
mod segment;
mod station;

pub use error::DomainError;
pub use line::{Line, LineId};
pub use network::{Network, NetworkBuilder};
pub use route::{Calling, NO_TRAVEL_REQUIRED, Route, display_all_routes};
pub use segment::Segment;
pub use station::{Station, StationId};
