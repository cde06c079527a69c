//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::Network;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Searches hold the read lock for their whole run and toggles take the
/// write lock, so a search always sees one consistent set of
/// closed/suspended flags.
#[derive(Clone)]
pub struct AppState {
    /// The transit network, including its live flags
    pub network: Arc<RwLock<Network>>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
            config: Arc::new(config),
        }
    }
}
