//! Search configuration for the route planner.

use serde::{Deserialize, Serialize};

/// What the planner optimises for when ordering routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Shortest total travel time.
    #[default]
    Duration,
    /// Fewest changes, then shortest travel time.
    Changes,
    /// Fewest segments travelled, then shortest travel time.
    Stops,
}

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Ordering applied to the routes found.
    pub objective: Objective,

    /// Maximum number of routes to return.
    pub max_results: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(objective: Objective, max_results: usize) -> Self {
        Self {
            objective,
            max_results,
        }
    }

    /// Returns a copy with a different objective.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            objective: Objective::Duration,
            max_results: 10,
        }
    }
}
