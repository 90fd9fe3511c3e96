//! Network file validation.

use std::collections::HashSet;

use mg_core::{LineId, StationId};
use mg_line::{LineTopology, Segment, TopologyError};

use crate::schema::{NetworkDef, SCHEMA_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported schema version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate station id: {0}")]
    DuplicateStation(StationId),

    #[error("Duplicate line id: {0}")]
    DuplicateLine(LineId),

    #[error("Line {line} references unknown station {station}")]
    MissingStation { line: LineId, station: StationId },

    #[error("Line {0} has no segments")]
    EmptyLine(LineId),

    #[error("Line {line} chain is invalid: {source}")]
    InvalidChain {
        line: LineId,
        source: TopologyError,
    },
}

/// Validate a network definition: version, id uniqueness, station
/// references, and every line's chain shape.
pub fn validate_network(def: &NetworkDef) -> Result<(), ValidationError> {
    if def.version > SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    let mut station_ids: HashSet<StationId> = HashSet::new();
    for station in &def.stations {
        if !station_ids.insert(station.id) {
            return Err(ValidationError::DuplicateStation(station.id));
        }
    }

    let mut line_ids: HashSet<LineId> = HashSet::new();
    for line in &def.lines {
        if !line_ids.insert(line.id) {
            return Err(ValidationError::DuplicateLine(line.id));
        }

        if line.segments.is_empty() {
            return Err(ValidationError::EmptyLine(line.id));
        }

        for segment in &line.segments {
            for endpoint in [segment.up, segment.down] {
                if !station_ids.contains(&endpoint) {
                    return Err(ValidationError::MissingStation {
                        line: line.id,
                        station: endpoint,
                    });
                }
            }
        }

        let segments: Result<Vec<Segment>, TopologyError> = line
            .segments
            .iter()
            .map(|s| Segment::new(line.id, s.up, s.down, s.distance))
            .collect();
        let chain = segments
            .and_then(|segments| LineTopology::from_segments(line.id, segments));
        if let Err(source) = chain {
            return Err(ValidationError::InvalidChain {
                line: line.id,
                source,
            });
        }
    }

    Ok(())
}
