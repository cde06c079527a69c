//! Station types.

use std::fmt;

/// Identifier of a station within one [`Network`](super::Network).
///
/// Ids are minted by the network registry when a station is added and are
/// the only notion of station identity used by the planner. Two stations
/// sharing a name still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub(crate) u32);

impl StationId {
    /// Returns the registry slot of this station.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the transit network.
///
/// A closed station can still be travelled through; only routes that
/// *start* at a closed station are removed from search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    closed: bool,
}

impl Station {
    /// Creates an open station.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            closed: false,
        }
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn open(&mut self) {
        self.closed = false;
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
