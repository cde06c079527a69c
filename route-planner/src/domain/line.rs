//! Line types.

use std::fmt;

/// Identifier of a line within one [`Network`](super::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) u32);

impl LineId {
    /// Returns the registry slot of this line.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named grouping of segments, e.g. the Central line.
///
/// Segments on a suspended line are skipped by the search and do not count
/// towards a route's duration or changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    suspended: bool,
}

impl Line {
    /// Creates an active line.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suspended: false,
        }
    }

    /// Returns the bare line name (without the "Line" suffix).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Line", self.name)
    }
}
