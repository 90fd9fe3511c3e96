//! Station directory and line store boundaries.

use std::collections::{BTreeMap, HashMap};

use mg_core::{LineId, Station, StationId};
use mg_line::{Line, SectionChange, Segment};
use tracing::debug;

use crate::schema::{LineDef, NetworkDef, SCHEMA_VERSION, SegmentDef, StationDef};
use crate::{NetworkError, NetworkResult, validate_network};

/// Resolves station identifiers to station records.
///
/// The directory owns station identity uniqueness; topology and route
/// code holds ids and resolves them here only when a caller needs the
/// full records.
pub trait StationDirectory {
    fn resolve(&self, id: StationId) -> Option<Station>;

    /// Resolve a batch of ids. Missing ids are simply absent from the
    /// result map.
    fn resolve_many(&self, ids: &[StationId]) -> HashMap<StationId, Station> {
        ids.iter()
            .filter_map(|&id| self.resolve(id).map(|station| (id, station)))
            .collect()
    }
}

/// Persistence boundary for lines and their segments.
///
/// `save_segments` must apply a changeset atomically: either every
/// delete and create lands, or none do. That guarantee is what keeps a
/// split or merge from ever exposing a half-written chain. Callers
/// serialize mutations per line; mutations on different lines are
/// independent.
pub trait LineStore {
    fn load_all_lines(&self) -> NetworkResult<Vec<(Line, Vec<Segment>)>>;

    fn load_segments(&self, id: LineId) -> NetworkResult<Vec<Segment>>;

    fn save_segments(&mut self, id: LineId, change: &SectionChange) -> NetworkResult<()>;
}

#[derive(Debug, Clone)]
struct LineRecord {
    line: Line,
    segments: Vec<Segment>,
}

/// The whole network held in memory: station registry plus every line's
/// stored segments.
///
/// Backs both collaborator traits and converts to and from the file
/// schema. Iteration orders are sorted by id, so listings and graph
/// assembly are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNetwork {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, LineRecord>,
    next_station_id: u64,
    next_line_id: u64,
}

impl InMemoryNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a validated file definition.
    pub fn from_def(def: &NetworkDef) -> NetworkResult<Self> {
        validate_network(def)?;

        let mut network = Self::new();
        for station in &def.stations {
            network
                .stations
                .insert(station.id, Station::new(station.id, station.name.clone()));
            network.next_station_id = network.next_station_id.max(station.id.get() + 1);
        }
        for line_def in &def.lines {
            let segments = line_def
                .segments
                .iter()
                .map(|s| Segment::new(line_def.id, s.up, s.down, s.distance))
                .collect::<Result<Vec<_>, _>>()?;
            network.lines.insert(
                line_def.id,
                LineRecord {
                    line: Line::new(line_def.id, line_def.name.clone(), line_def.color.clone()),
                    segments,
                },
            );
            network.next_line_id = network.next_line_id.max(line_def.id.get() + 1);
        }
        Ok(network)
    }

    /// Export to the file schema, sorted by id.
    pub fn to_def(&self) -> NetworkDef {
        NetworkDef {
            version: SCHEMA_VERSION,
            stations: self
                .stations
                .values()
                .map(|station| StationDef {
                    id: station.id,
                    name: station.name.clone(),
                })
                .collect(),
            lines: self
                .lines
                .values()
                .map(|record| LineDef {
                    id: record.line.id,
                    name: record.line.name.clone(),
                    color: record.line.color.clone(),
                    segments: record
                        .segments
                        .iter()
                        .map(|s| SegmentDef {
                            up: s.up,
                            down: s.down,
                            distance: s.distance,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn create_station(&mut self, name: &str) -> Station {
        let id = StationId::new(self.next_station_id);
        self.next_station_id += 1;
        let station = Station::new(id, name);
        self.stations.insert(id, station.clone());
        station
    }

    /// Delete a station from the registry. Rejected while any line still
    /// references it.
    pub fn delete_station(&mut self, id: StationId) -> NetworkResult<()> {
        if !self.stations.contains_key(&id) {
            return Err(NetworkError::StationNotFound(id));
        }
        let referenced = self
            .lines
            .values()
            .flat_map(|record| record.segments.iter())
            .any(|segment| segment.touches(id));
        if referenced {
            return Err(NetworkError::StationInUse(id));
        }
        self.stations.remove(&id);
        Ok(())
    }

    pub fn list_stations(&self) -> Vec<Station> {
        self.stations.values().cloned().collect()
    }

    /// Create a line together with its first segment.
    pub fn create_line(
        &mut self,
        name: &str,
        color: &str,
        up: StationId,
        down: StationId,
        distance: u64,
    ) -> NetworkResult<Line> {
        for endpoint in [up, down] {
            if !self.stations.contains_key(&endpoint) {
                return Err(NetworkError::StationNotFound(endpoint));
            }
        }

        let id = LineId::new(self.next_line_id);
        self.next_line_id += 1;
        let first = Segment::new(id, up, down, distance)?;
        let line = Line::new(id, name, color);
        self.lines.insert(
            id,
            LineRecord {
                line: line.clone(),
                segments: vec![first],
            },
        );
        Ok(line)
    }

    pub fn update_line(&mut self, id: LineId, name: &str, color: &str) -> NetworkResult<Line> {
        let record = self
            .lines
            .get_mut(&id)
            .ok_or(NetworkError::LineNotFound(id))?;
        record.line.update(name, color);
        Ok(record.line.clone())
    }

    /// Destroy a line and all of its segments.
    pub fn delete_line(&mut self, id: LineId) -> NetworkResult<()> {
        if self.lines.remove(&id).is_none() {
            return Err(NetworkError::LineNotFound(id));
        }
        Ok(())
    }
}

impl StationDirectory for InMemoryNetwork {
    fn resolve(&self, id: StationId) -> Option<Station> {
        self.stations.get(&id).cloned()
    }
}

impl LineStore for InMemoryNetwork {
    fn load_all_lines(&self) -> NetworkResult<Vec<(Line, Vec<Segment>)>> {
        Ok(self
            .lines
            .values()
            .map(|record| (record.line.clone(), record.segments.clone()))
            .collect())
    }

    fn load_segments(&self, id: LineId) -> NetworkResult<Vec<Segment>> {
        let record = self.lines.get(&id).ok_or(NetworkError::LineNotFound(id))?;
        Ok(record.segments.clone())
    }

    fn save_segments(&mut self, id: LineId, change: &SectionChange) -> NetworkResult<()> {
        let record = self
            .lines
            .get_mut(&id)
            .ok_or(NetworkError::LineNotFound(id))?;

        // Locate every delete target before touching anything, so a stale
        // changeset leaves the stored chain untouched.
        let mut doomed = Vec::with_capacity(change.to_delete.len());
        for target in &change.to_delete {
            let position = record
                .segments
                .iter()
                .enumerate()
                .find(|(ix, s)| *s == target && !doomed.contains(ix))
                .map(|(ix, _)| ix)
                .ok_or(NetworkError::SegmentNotFound(id))?;
            doomed.push(position);
        }

        doomed.sort_unstable();
        for position in doomed.into_iter().rev() {
            record.segments.remove(position);
        }
        record.segments.extend(change.to_create.iter().cloned());

        debug!(
            line = %id,
            created = change.to_create.len(),
            deleted = change.to_delete.len(),
            "segments saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> (InMemoryNetwork, Station, Station) {
        let mut network = InMemoryNetwork::new();
        let a = network.create_station("Central");
        let b = network.create_station("Riverside");
        (network, a, b)
    }

    #[test]
    fn create_station_allocates_fresh_ids() {
        let (network, a, b) = seeded();
        assert_ne!(a.id, b.id);
        assert_eq!(network.list_stations().len(), 2);
    }

    #[test]
    fn create_line_requires_known_stations() {
        let (mut network, a, _) = seeded();
        let err = network
            .create_line("Blue", "blue", a.id, StationId::new(99), 10)
            .unwrap_err();
        assert!(matches!(err, NetworkError::StationNotFound(_)));
    }

    #[test]
    fn delete_station_rejected_while_referenced() {
        let (mut network, a, b) = seeded();
        network.create_line("Blue", "blue", a.id, b.id, 10).unwrap();
        assert!(matches!(
            network.delete_station(a.id),
            Err(NetworkError::StationInUse(_))
        ));
    }

    #[test]
    fn save_segments_applies_delete_and_create_together() {
        let (mut network, a, b) = seeded();
        let c = network.create_station("Museum");
        let line = network.create_line("Blue", "blue", a.id, b.id, 10).unwrap();

        // Split [a-b:10] into [a-c:4, c-b:6] through the changeset path.
        let old = Segment::new(line.id, a.id, b.id, 10).unwrap();
        let change = SectionChange {
            to_create: vec![
                Segment::new(line.id, a.id, c.id, 4).unwrap(),
                Segment::new(line.id, c.id, b.id, 6).unwrap(),
            ],
            to_delete: vec![old],
        };
        network.save_segments(line.id, &change).unwrap();

        let segments = network.load_segments(line.id).unwrap();
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn stale_changeset_leaves_store_untouched() {
        let (mut network, a, b) = seeded();
        let line = network.create_line("Blue", "blue", a.id, b.id, 10).unwrap();

        let change = SectionChange {
            to_create: vec![Segment::new(line.id, b.id, a.id, 1).unwrap()],
            to_delete: vec![Segment::new(line.id, a.id, b.id, 999).unwrap()],
        };
        assert!(matches!(
            network.save_segments(line.id, &change),
            Err(NetworkError::SegmentNotFound(_))
        ));
        assert_eq!(network.load_segments(line.id).unwrap().len(), 1);
    }

    #[test]
    fn def_round_trip_preserves_content() {
        let (mut network, a, b) = seeded();
        network.create_line("Blue", "blue", a.id, b.id, 10).unwrap();

        let def = network.to_def();
        let rebuilt = InMemoryNetwork::from_def(&def).unwrap();
        assert_eq!(rebuilt.to_def(), def);
    }
}
