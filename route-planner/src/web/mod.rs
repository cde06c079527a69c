//! Web layer for the route planner.
//!
//! Provides HTTP endpoints for planning routes and for closing stations or
//! suspending lines on the shared network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
