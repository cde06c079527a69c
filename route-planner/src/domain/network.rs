//! The transit network: a registry of stations and lines plus the ordered
//! list of segments connecting them.

use std::collections::HashMap;

use super::{DomainError, Line, LineId, Segment, Station, StationId};

/// A fixed-topology transit network.
///
/// Stations and lines live in an arena owned by the network and are
/// referenced from segments by id. Their `closed`/`suspended` flags are
/// stored here once, so toggling a station affects every segment that
/// mentions it.
///
/// Segment order is insertion order and is observable: the search explores
/// outgoing segments in this order, which fixes the order of equal-cost
/// routes in the results.
///
/// No structural validation is done. Duplicate segments, self-loops and
/// stations without segments are all legal.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    lines: Vec<Line>,
    segments: Vec<Segment>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station and return its id.
    ///
    /// Registering the same name twice creates two distinct stations.
    pub fn add_station(&mut self, name: impl Into<String>) -> StationId {
        let id = StationId(self.stations.len() as u32);
        self.stations.push(Station::new(name));
        id
    }

    /// Register a line and return its id.
    pub fn add_line(&mut self, name: impl Into<String>) -> LineId {
        let id = LineId(self.lines.len() as u32);
        self.lines.push(Line::new(name));
        id
    }

    /// Append a segment between two registered stations.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either station or the line was not registered with
    /// this network, or if `avg_minutes` is negative.
    pub fn add_segment(
        &mut self,
        start: StationId,
        end: StationId,
        line: LineId,
        avg_minutes: i64,
    ) -> Result<Segment, DomainError> {
        let segment = Segment::new(start, end, line, avg_minutes)?;
        self.push_segment(segment)?;
        Ok(segment)
    }

    /// Append an already constructed segment.
    pub fn push_segment(&mut self, segment: Segment) -> Result<(), DomainError> {
        self.check_segment(&segment)?;
        self.segments.push(segment);
        Ok(())
    }

    /// Check that every id a segment references belongs to this network.
    pub(crate) fn check_segment(&self, segment: &Segment) -> Result<(), DomainError> {
        for id in [segment.start(), segment.end()] {
            if self.station(id).is_none() {
                return Err(DomainError::UnknownStation(id));
            }
        }
        if self.line(segment.line()).is_none() {
            return Err(DomainError::UnknownLine(segment.line()));
        }
        Ok(())
    }

    /// All segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments leaving `from`, in insertion order.
    pub fn outgoing(&self, from: StationId) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.start() == from)
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.index())
    }

    /// All stations with their ids, in registration order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationId(i as u32), s))
    }

    /// All lines with their ids, in registration order.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, l)| (LineId(i as u32), l))
    }

    /// Look up the first station registered under `name`.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.stations().find(|(_, s)| s.name() == name).map(|(id, _)| id)
    }

    /// Look up the first line registered under `name`.
    pub fn line_id(&self, name: &str) -> Option<LineId> {
        self.lines().find(|(_, l)| l.name() == name).map(|(id, _)| id)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Name of a station, or an empty string for an id from another network.
    pub fn station_name(&self, id: StationId) -> &str {
        self.station(id).map_or("", Station::name)
    }

    /// Name of a line, or an empty string for an id from another network.
    pub fn line_name(&self, id: LineId) -> &str {
        self.line(id).map_or("", Line::name)
    }

    /// Whether the station is currently closed. Unknown ids count as open.
    pub fn is_closed(&self, id: StationId) -> bool {
        self.station(id).is_some_and(Station::is_closed)
    }

    /// Whether the line is currently suspended. Unknown ids count as active.
    pub fn is_suspended(&self, id: LineId) -> bool {
        self.line(id).is_some_and(Line::is_suspended)
    }

    pub fn close_station(&mut self, id: StationId) -> Result<(), DomainError> {
        self.station_mut(id)?.close();
        Ok(())
    }

    pub fn open_station(&mut self, id: StationId) -> Result<(), DomainError> {
        self.station_mut(id)?.open();
        Ok(())
    }

    pub fn suspend_line(&mut self, id: LineId) -> Result<(), DomainError> {
        self.line_mut(id)?.suspend();
        Ok(())
    }

    pub fn resume_line(&mut self, id: LineId) -> Result<(), DomainError> {
        self.line_mut(id)?.resume();
        Ok(())
    }

    /// Render a segment as `"<start> -> <end> on <line> Line (<n> min)"`.
    pub fn describe_segment(&self, segment: &Segment) -> String {
        format!(
            "{} -> {} on {} Line ({} min)",
            self.station_name(segment.start()),
            self.station_name(segment.end()),
            self.line_name(segment.line()),
            segment.avg_minutes()
        )
    }

    fn station_mut(&mut self, id: StationId) -> Result<&mut Station, DomainError> {
        self.stations
            .get_mut(id.index())
            .ok_or(DomainError::UnknownStation(id))
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut Line, DomainError> {
        self.lines
            .get_mut(id.index())
            .ok_or(DomainError::UnknownLine(id))
    }
}

/// Builder for creating a network from station and line names.
///
/// Names are interned: every mention of the same station name refers to one
/// station, and likewise for lines. The first invalid call is remembered and
/// reported by [`build`](Self::build).
///
/// ```
/// use route_planner::domain::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .segment("Oxford Circus", "Bond Street", "Central", 2)
///     .suspend("Central")
///     .build()
///     .unwrap();
///
/// let central = network.line_id("Central").unwrap();
/// assert!(network.is_suspended(central));
/// assert_eq!(network.segments().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
    station_ids: HashMap<String, StationId>,
    line_ids: HashMap<String, LineId>,
    error: Option<DomainError>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station by name without adding any segment.
    pub fn station(mut self, name: &str) -> Self {
        self.intern_station(name);
        self
    }

    /// Add a directed segment, registering its stations and line as needed.
    pub fn segment(mut self, from: &str, to: &str, line: &str, avg_minutes: i64) -> Self {
        let start = self.intern_station(from);
        let end = self.intern_station(to);
        let line = self.intern_line(line);
        if let Err(e) = self.inner.add_segment(start, end, line, avg_minutes) {
            self.record(e);
        }
        self
    }

    /// Mark a previously mentioned station as closed.
    pub fn close(mut self, station: &str) -> Self {
        match self.station_ids.get(station) {
            Some(&id) => {
                if let Err(e) = self.inner.close_station(id) {
                    self.record(e);
                }
            }
            None => self.record(DomainError::UnknownStationName(station.to_string())),
        }
        self
    }

    /// Mark a previously mentioned line as suspended.
    pub fn suspend(mut self, line: &str) -> Self {
        match self.line_ids.get(line) {
            Some(&id) => {
                if let Err(e) = self.inner.suspend_line(id) {
                    self.record(e);
                }
            }
            None => self.record(DomainError::UnknownLineName(line.to_string())),
        }
        self
    }

    /// Build the network.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any builder call.
    pub fn build(self) -> Result<Network, DomainError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.inner),
        }
    }

    fn intern_station(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.station_ids.get(name) {
            return id;
        }
        let id = self.inner.add_station(name);
        self.station_ids.insert(name.to_string(), id);
        id
    }

    fn intern_line(&mut self, name: &str) -> LineId {
        if let Some(&id) = self.line_ids.get(name) {
            return id;
        }
        let id = self.inner.add_line(name);
        self.line_ids.insert(name.to_string(), id);
        id
    }

    fn record(&mut self, error: DomainError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_stations_and_lines() {
        let mut network = Network::new();
        let a = network.add_station("Camden Town");
        let b = network.add_station("Euston");
        let northern = network.add_line("Northern");

        assert_eq!(network.station_count(), 2);
        assert_eq!(network.line_count(), 1);
        assert_eq!(network.station_name(a), "Camden Town");
        assert_eq!(network.station_name(b), "Euston");
        assert_eq!(network.line_name(northern), "Northern");
    }

    #[test]
    fn same_name_is_distinct_station() {
        let mut network = Network::new();
        let first = network.add_station("Edgware Road");
        let second = network.add_station("Edgware Road");

        assert_ne!(first, second);
        // Name lookup resolves to the first registration
        assert_eq!(network.station_id("Edgware Road"), Some(first));
    }

    #[test]
    fn segments_keep_insertion_order() {
        let mut network = Network::new();
        let a = network.add_station("A");
        let b = network.add_station("B");
        let c = network.add_station("C");
        let line = network.add_line("L");

        network.add_segment(a, c, line, 5).unwrap();
        network.add_segment(a, b, line, 1).unwrap();
        network.add_segment(b, c, line, 1).unwrap();

        let ends: Vec<_> = network.outgoing(a).map(|s| s.end()).collect();
        assert_eq!(ends, vec![c, b]);
        assert_eq!(network.segments().len(), 3);
    }

    #[test]
    fn duplicates_and_self_loops_are_legal() {
        let mut network = Network::new();
        let a = network.add_station("A");
        let line = network.add_line("L");

        network.add_segment(a, a, line, 1).unwrap();
        network.add_segment(a, a, line, 1).unwrap();

        assert_eq!(network.segments().len(), 2);
    }

    #[test]
    fn add_segment_rejects_foreign_ids() {
        let mut network = Network::new();
        let a = network.add_station("A");
        let line = network.add_line("L");

        let result = network.add_segment(a, StationId(9), line, 1);
        assert_eq!(result, Err(DomainError::UnknownStation(StationId(9))));

        let result = network.add_segment(a, a, LineId(3), 1);
        assert_eq!(result, Err(DomainError::UnknownLine(LineId(3))));

        assert!(network.segments().is_empty());
    }

    #[test]
    fn add_segment_rejects_negative_minutes() {
        let mut network = Network::new();
        let a = network.add_station("A");
        let b = network.add_station("B");
        let line = network.add_line("L");

        let result = network.add_segment(a, b, line, -2);
        assert_eq!(result, Err(DomainError::NegativeDuration(-2)));
    }

    #[test]
    fn toggles_flags() {
        let mut network = Network::new();
        let a = network.add_station("A");
        let line = network.add_line("L");

        network.close_station(a).unwrap();
        assert!(network.is_closed(a));
        network.open_station(a).unwrap();
        assert!(!network.is_closed(a));

        network.suspend_line(line).unwrap();
        assert!(network.is_suspended(line));
        network.resume_line(line).unwrap();
        assert!(!network.is_suspended(line));
    }

    #[test]
    fn toggling_unknown_ids_fails() {
        let mut network = Network::new();

        assert_eq!(
            network.close_station(StationId(0)),
            Err(DomainError::UnknownStation(StationId(0)))
        );
        assert_eq!(
            network.suspend_line(LineId(0)),
            Err(DomainError::UnknownLine(LineId(0)))
        );
        assert!(!network.is_closed(StationId(0)));
        assert!(!network.is_suspended(LineId(0)));
    }

    #[test]
    fn describe_segment() {
        let network = NetworkBuilder::new()
            .segment("Euston", "Warren Street", "Victoria", 3)
            .build()
            .unwrap();

        assert_eq!(
            network.describe_segment(&network.segments()[0]),
            "Euston -> Warren Street on Victoria Line (3 min)"
        );
    }

    #[test]
    fn builder_interns_names() {
        let network = NetworkBuilder::new()
            .segment("A", "B", "Central", 2)
            .segment("B", "A", "Central", 2)
            .segment("B", "C", "New", 4)
            .station("Isolated")
            .build()
            .unwrap();

        assert_eq!(network.station_count(), 4);
        assert_eq!(network.line_count(), 2);
        assert_eq!(network.segments().len(), 3);

        let a = network.station_id("A").unwrap();
        let b = network.station_id("B").unwrap();
        assert_eq!(network.segments()[0].start(), a);
        assert_eq!(network.segments()[1].start(), b);
        assert_eq!(network.segments()[1].end(), a);
    }

    #[test]
    fn builder_applies_flags() {
        let network = NetworkBuilder::new()
            .segment("A", "B", "Central", 2)
            .close("A")
            .suspend("Central")
            .build()
            .unwrap();

        assert!(network.is_closed(network.station_id("A").unwrap()));
        assert!(!network.is_closed(network.station_id("B").unwrap()));
        assert!(network.is_suspended(network.line_id("Central").unwrap()));
    }

    #[test]
    fn builder_reports_first_error() {
        let result = NetworkBuilder::new()
            .segment("A", "B", "Central", -5)
            .close("Nowhere")
            .build();

        assert_eq!(result.unwrap_err(), DomainError::NegativeDuration(-5));
    }

    #[test]
    fn builder_rejects_unknown_names() {
        let result = NetworkBuilder::new().close("Nowhere").build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::UnknownStationName("Nowhere".into())
        );

        let result = NetworkBuilder::new().suspend("Jubilee").build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::UnknownLineName("Jubilee".into())
        );
    }
}
