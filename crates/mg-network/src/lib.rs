//! mg-network: network file format, validation, and collaborator
//! boundaries.
//!
//! The topology and route crates consume the surrounding world through
//! two narrow traits defined here: [`StationDirectory`] (station identity
//! lookup) and [`LineStore`] (line/segment persistence with atomic
//! changeset writes). [`InMemoryNetwork`] implements both and converts to
//! and from the serde file schema.

pub mod schema;
pub mod store;
pub mod validate;

pub use schema::{LineDef, NetworkDef, SCHEMA_VERSION, SegmentDef, StationDef};
pub use store::{InMemoryNetwork, LineStore, StationDirectory};
pub use validate::{ValidationError, validate_network};

use std::path::Path;

use mg_core::{LineId, StationId};
use mg_line::TopologyError;
use tracing::debug;

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Line not found: {0}")]
    LineNotFound(LineId),

    #[error("Station not found: {0}")]
    StationNotFound(StationId),

    #[error("Station {0} is still referenced by a line")]
    StationInUse(StationId),

    #[error("Changeset refers to a segment not stored for line {0}")]
    SegmentNotFound(LineId),

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> NetworkResult<InMemoryNetwork> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_yaml::from_str(&content)?;
    let network = InMemoryNetwork::from_def(&def)?;
    debug!(
        stations = def.stations.len(),
        lines = def.lines.len(),
        "network loaded"
    );
    Ok(network)
}

pub fn save_yaml(path: &Path, network: &InMemoryNetwork) -> NetworkResult<()> {
    let def = network.to_def();
    validate_network(&def)?;
    let content = serde_yaml::to_string(&def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> NetworkResult<InMemoryNetwork> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_json::from_str(&content)?;
    InMemoryNetwork::from_def(&def)
}

pub fn save_json(path: &Path, network: &InMemoryNetwork) -> NetworkResult<()> {
    let def = network.to_def();
    validate_network(&def)?;
    let content = serde_json::to_string_pretty(&def)?;
    std::fs::write(path, content)?;
    Ok(())
}
