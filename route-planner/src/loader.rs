//! JSON network files.
//!
//! A network file lists segments by station and line name, plus the
//! stations that are closed and the lines that are suspended:
//!
//! ```json
//! {
//!   "segments": [
//!     { "from": "Euston", "to": "Warren Street", "line": "Victoria", "minutes": 3 }
//!   ],
//!   "stations": ["Mornington Crescent"],
//!   "closed_stations": ["Euston"],
//!   "suspended_lines": []
//! }
//! ```
//!
//! Names are interned, so every mention of a name is the same station.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Network, NetworkBuilder};

/// Errors that can occur when loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum NetworkFileError {
    /// File could not be read
    #[error("failed to read network file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse file JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File parsed but describes an invalid network
    #[error("invalid network: {0}")]
    Domain(#[from] DomainError),
}

/// One segment entry of a network file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEntry {
    pub from: String,
    pub to: String,
    pub line: String,
    /// Average travel time in minutes
    pub minutes: i64,
}

/// Serialized form of a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFile {
    /// Segments in search order.
    pub segments: Vec<SegmentEntry>,

    /// Stations to register even if no segment mentions them.
    #[serde(default)]
    pub stations: Vec<String>,

    #[serde(default)]
    pub closed_stations: Vec<String>,

    #[serde(default)]
    pub suspended_lines: Vec<String>,
}

impl NetworkFile {
    /// Read and parse a network file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkFileError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| NetworkFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse a network file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Describe an existing network.
    ///
    /// Stations sharing a name collapse into one name, so this is only a
    /// faithful copy of networks built by name.
    pub fn from_network(network: &Network) -> Self {
        let segments = network
            .segments()
            .iter()
            .map(|s| SegmentEntry {
                from: network.station_name(s.start()).to_string(),
                to: network.station_name(s.end()).to_string(),
                line: network.line_name(s.line()).to_string(),
                minutes: i64::from(s.avg_minutes()),
            })
            .collect();

        let mut stations = Vec::new();
        let mut closed_stations = Vec::new();
        for (id, station) in network.stations() {
            if network.outgoing(id).next().is_none()
                && !network.segments().iter().any(|s| s.end() == id)
            {
                stations.push(station.name().to_string());
            }
            if station.is_closed() {
                closed_stations.push(station.name().to_string());
            }
        }

        let suspended_lines = network
            .lines()
            .filter(|(_, line)| line.is_suspended())
            .map(|(_, line)| line.name().to_string())
            .collect();

        Self {
            segments,
            stations,
            closed_stations,
            suspended_lines,
        }
    }

    /// Build the network this file describes.
    pub fn into_network(self) -> Result<Network, DomainError> {
        let mut builder = NetworkBuilder::new();
        for entry in &self.segments {
            builder = builder.segment(&entry.from, &entry.to, &entry.line, entry.minutes);
        }
        for name in &self.stations {
            builder = builder.station(name);
        }
        for name in &self.closed_stations {
            builder = builder.close(name);
        }
        for name in &self.suspended_lines {
            builder = builder.suspend(name);
        }
        builder.build()
    }
}

/// Load a network from a JSON file.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, NetworkFileError> {
    Ok(NetworkFile::load(path)?.into_network()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const VICTORIA: &str = r#"{
        "segments": [
            { "from": "Euston", "to": "Warren Street", "line": "Victoria", "minutes": 3 },
            { "from": "Warren Street", "to": "Oxford Circus", "line": "Victoria", "minutes": 3 }
        ],
        "closed_stations": ["Warren Street"]
    }"#;

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(&path, VICTORIA).unwrap();

        let network = load_network(&path).unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.segments().len(), 2);
        assert!(network.is_closed(network.station_id("Warren Street").unwrap()));
        assert!(!network.is_closed(network.station_id("Euston").unwrap()));
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let file = NetworkFile::from_json(r#"{ "segments": [] }"#).unwrap();

        assert!(file.segments.is_empty());
        assert!(file.stations.is_empty());
        assert!(file.closed_stations.is_empty());
        assert!(file.suspended_lines.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_network(&path).unwrap_err();
        assert!(matches!(err, NetworkFileError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_network(&path).unwrap_err();
        assert!(matches!(err, NetworkFileError::Json(_)));
    }

    #[test]
    fn negative_minutes_rejected() {
        let json = r#"{ "segments": [
            { "from": "A", "to": "B", "line": "Red", "minutes": -4 }
        ] }"#;

        let err = NetworkFile::from_json(json)
            .unwrap()
            .into_network()
            .unwrap_err();
        assert_eq!(err, DomainError::NegativeDuration(-4));
    }

    #[test]
    fn unknown_suspended_line_rejected() {
        let json = r#"{ "segments": [], "suspended_lines": ["Jubilee"] }"#;

        let err = NetworkFile::from_json(json)
            .unwrap()
            .into_network()
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownLineName("Jubilee".into()));
    }

    #[test]
    fn isolated_stations_registered() {
        let json = r#"{ "segments": [], "stations": ["Mornington Crescent"] }"#;

        let network = NetworkFile::from_json(json)
            .unwrap()
            .into_network()
            .unwrap();
        assert!(network.station_id("Mornington Crescent").is_some());
    }

    #[test]
    fn describes_existing_network() {
        let network = NetworkBuilder::new()
            .segment("A", "B", "Red", 2)
            .station("Lonely")
            .close("B")
            .suspend("Red")
            .build()
            .unwrap();

        let file = NetworkFile::from_network(&network);

        assert_eq!(
            file.segments,
            vec![SegmentEntry {
                from: "A".into(),
                to: "B".into(),
                line: "Red".into(),
                minutes: 2,
            }]
        );
        assert_eq!(file.stations, vec!["Lonely".to_string()]);
        assert_eq!(file.closed_stations, vec!["B".to_string()]);
        assert_eq!(file.suspended_lines, vec!["Red".to_string()]);

        // Rebuilding gives the same description
        let rebuilt = file.clone().into_network().unwrap();
        assert_eq!(NetworkFile::from_network(&rebuilt), file);
    }
}
