//! Segment type: one directed hop between two stations on a line.

use super::{DomainError, LineId, StationId};

/// A directed, weighted edge between two stations on one line.
///
/// Segments are immutable once constructed. The average travel time is
/// validated to be non-negative at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    start: StationId,
    end: StationId,
    line: LineId,
    avg_minutes: u32,
}

impl Segment {
    /// Creates a segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `avg_minutes` is negative or does not fit in a `u32`.
    pub fn new(
        start: StationId,
        end: StationId,
        line: LineId,
        avg_minutes: i64,
    ) -> Result<Self, DomainError> {
        if avg_minutes < 0 {
            return Err(DomainError::NegativeDuration(avg_minutes));
        }
        let avg_minutes =
            u32::try_from(avg_minutes).map_err(|_| DomainError::DurationOverflow(avg_minutes))?;

        Ok(Self {
            start,
            end,
            line,
            avg_minutes,
        })
    }

    pub fn start(&self) -> StationId {
        self.start
    }

    pub fn end(&self) -> StationId {
        self.end
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    /// Average travel time in minutes.
    pub fn avg_minutes(&self) -> u32 {
        self.avg_minutes
    }
}
