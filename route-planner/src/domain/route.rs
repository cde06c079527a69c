//! Route types.
//!
//! A `Route` is an ordered chain of segments from an origin to a
//! destination. It borrows the network it was built from, because the
//! derived values (duration, changes, rendering) read station names and the
//! live `suspended` flags from the network registry.

use std::collections::HashSet;
use std::fmt;

use super::{DomainError, LineId, Network, Segment, StationId};

/// Text rendered for a route with no segments.
pub const NO_TRAVEL_REQUIRED: &str = "No travel required.";

/// A contiguous run of segments on one line, collapsed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calling {
    /// Station where the run is boarded
    pub from: StationId,
    /// Station where the run is left
    pub to: StationId,
    /// Line the run travels on
    pub line: LineId,
}

/// A path through the network.
///
/// # Invariants
///
/// - Consecutive segments chain (end of one = start of next)
/// - Every segment references stations and a line of `network`
///
/// A route with zero segments means the origin already is the destination.
#[derive(Debug, Clone)]
pub struct Route<'a> {
    network: &'a Network,
    segments: Vec<Segment>,
}

impl<'a> Route<'a> {
    /// Constructs a route from segments of `network`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - A segment references a station or line not in `network`
    /// - Segments don't chain (end of one != start of the next)
    ///
    /// # Examples
    ///
    /// ```
    /// use route_planner::domain::{NetworkBuilder, Route};
    ///
    /// let network = NetworkBuilder::new()
    ///     .segment("Tufnell Park", "Archway", "Northern", 3)
    ///     .segment("Archway", "Highgate", "Northern", 3)
    ///     .build()
    ///     .unwrap();
    ///
    /// let route = Route::new(&network, network.segments().to_vec()).unwrap();
    ///
    /// assert_eq!(route.duration(), 6);
    /// assert_eq!(route.num_changes(), 0);
    /// ```
    pub fn new(network: &'a Network, segments: Vec<Segment>) -> Result<Self, DomainError> {
        for segment in &segments {
            network.check_segment(segment)?;
        }

        for window in segments.windows(2) {
            let prev_end = window[0].end();
            let next_start = window[1].start();
            if prev_end != next_start {
                return Err(DomainError::StationsNotConnected(
                    network.station_name(prev_end).to_string(),
                    network.station_name(next_start).to_string(),
                ));
            }
        }

        Ok(Self { network, segments })
    }

    /// The zero-segment route: already at the destination.
    pub fn empty(network: &'a Network) -> Self {
        Self {
            network,
            segments: Vec::new(),
        }
    }

    /// Constructs a route the search has already proven to chain.
    pub(crate) fn from_chain(network: &'a Network, segments: Vec<Segment>) -> Self {
        debug_assert!(segments.windows(2).all(|w| w[0].end() == w[1].start()));
        Self { network, segments }
    }

    /// The network this route was built from.
    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// True for the zero-segment route.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment, or `None` for an empty route.
    pub fn origin(&self) -> Option<StationId> {
        self.segments.first().map(Segment::start)
    }

    /// End of the last segment, or `None` for an empty route.
    pub fn destination(&self) -> Option<StationId> {
        self.segments.last().map(Segment::end)
    }

    /// Every station visited, origin first.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.origin()
            .into_iter()
            .chain(self.segments.iter().map(Segment::end))
    }

    /// Total travel time in minutes.
    ///
    /// Segments on a line that is currently suspended are left out.
    pub fn duration(&self) -> u64 {
        self.active_segments()
            .map(|s| u64::from(s.avg_minutes()))
            .sum()
    }

    /// Number of changes: distinct active lines used, minus one.
    ///
    /// A route with no active segments (including the empty route) has zero
    /// changes rather than minus one.
    pub fn num_changes(&self) -> usize {
        let lines: HashSet<LineId> = self.active_segments().map(Segment::line).collect();
        lines.len().saturating_sub(1)
    }

    /// Collapse the route into one calling per line.
    ///
    /// Lines are deduplicated by name from the front and from the back, and
    /// the two lists are paired by index: the i-th calling boards where its
    /// line first appears and alights where the matching line from the back
    /// last appears. This only gives sensible callings when each line forms
    /// one contiguous block; a route that returns to a line it already left
    /// (A, B, A) is collapsed to a single calling for that line.
    pub fn callings(&self) -> Vec<Calling> {
        let first_distinct = self.distinct_by_line_name(self.segments.iter());
        let last_distinct = self.distinct_by_line_name(self.segments.iter().rev());
        let n = first_distinct.len();

        first_distinct
            .iter()
            .enumerate()
            .map(|(i, first)| Calling {
                from: first.start(),
                to: last_distinct[n - 1 - i].end(),
                line: first.line(),
            })
            .collect()
    }

    fn distinct_by_line_name<'s>(
        &self,
        segments: impl Iterator<Item = &'s Segment>,
    ) -> Vec<&'s Segment> {
        let mut seen = HashSet::new();
        segments
            .filter(|s| seen.insert(self.network.line_name(s.line())))
            .collect()
    }

    fn active_segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments
            .iter()
            .filter(|s| !self.network.is_suspended(s.line()))
    }

    fn render(&self) -> String {
        let (Some(origin), Some(destination)) = (self.origin(), self.destination()) else {
            return NO_TRAVEL_REQUIRED.to_string();
        };

        let mut out = format!(
            "{} to {} - {} minutes, {} changes\n",
            self.network.station_name(origin),
            self.network.station_name(destination),
            self.duration(),
            self.num_changes()
        );
        for calling in self.callings() {
            out.push_str(&format!(
                " - {} to {} by {} Line\n",
                self.network.station_name(calling.from),
                self.network.station_name(calling.to),
                self.network.line_name(calling.line)
            ));
        }

        out.trim_end().to_string()
    }
}

impl fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render routes one after another, each followed by a newline.
///
/// An empty list renders as [`NO_TRAVEL_REQUIRED`] with no trailing newline.
pub fn display_all_routes(routes: &[Route<'_>]) -> String {
    if routes.is_empty() {
        return NO_TRAVEL_REQUIRED.to_string();
    }

    routes.iter().map(|route| format!("{route}\n")).collect()
}
