//! Transit route planner.
//!
//! Enumerates every simple route between two stations of a small network
//! with a depth-first search, ranks the routes by a pluggable cost, and
//! drops routes that cannot start because of a station closure.

pub mod domain;
pub mod loader;
pub mod planner;
pub mod sample;
pub mod web;
