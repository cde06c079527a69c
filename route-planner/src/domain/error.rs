//! Domain error types.
//!
//! These errors represent validation failures when building a network or a
//! route. Searching a well-formed network never fails.

use super::{LineId, StationId};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A segment was given a negative travel time
    #[error("segment duration must be non-negative, got {0} minutes")]
    NegativeDuration(i64),

    /// A segment travel time does not fit the minute counter
    #[error("segment duration of {0} minutes is too large")]
    DurationOverflow(i64),

    /// Consecutive segments don't chain (end of one != start of next)
    #[error("stations {0} and {1} are not connected")]
    StationsNotConnected(String, String),

    /// A station id that was not registered with this network
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// A line id that was not registered with this network
    #[error("unknown line: {0}")]
    UnknownLine(LineId),

    /// A station name that no segment or registration mentions
    #[error("no station named {0:?}")]
    UnknownStationName(String),

    /// A line name that no segment or registration mentions
    #[error("no line named {0:?}")]
    UnknownLineName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::NegativeDuration(-3);
        assert_eq!(
            err.to_string(),
            "segment duration must be non-negative, got -3 minutes"
        );

        let err = DomainError::DurationOverflow(i64::MAX);
        assert_eq!(
            err.to_string(),
            format!("segment duration of {} minutes is too large", i64::MAX)
        );

        let err = DomainError::StationsNotConnected("Archway".into(), "Euston".into());
        assert_eq!(err.to_string(), "stations Archway and Euston are not connected");

        let err = DomainError::UnknownStation(StationId(7));
        assert_eq!(err.to_string(), "unknown station: #7");

        let err = DomainError::UnknownLine(LineId(2));
        assert_eq!(err.to_string(), "unknown line: #2");

        let err = DomainError::UnknownStationName("Bank".into());
        assert_eq!(err.to_string(), "no station named \"Bank\"");

        let err = DomainError::UnknownLineName("Jubilee".into());
        assert_eq!(err.to_string(), "no line named \"Jubilee\"");
    }
}
