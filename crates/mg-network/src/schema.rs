//! Network file schema definitions.

use mg_core::{LineId, StationId};
use serde::{Deserialize, Serialize};

/// Current schema version written by [`crate::save_yaml`]/[`crate::save_json`].
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    #[serde(default)]
    pub stations: Vec<StationDef>,
    #[serde(default)]
    pub lines: Vec<LineDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationDef {
    pub id: StationId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDef {
    pub id: LineId,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub segments: Vec<SegmentDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentDef {
    pub up: StationId,
    pub down: StationId,
    pub distance: u64,
}
