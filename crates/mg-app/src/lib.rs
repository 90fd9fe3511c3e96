//! Shared application service layer for metrograph.
//!
//! This crate provides a unified interface for frontends (currently the
//! CLI), centralizing the query surface over the topology, route, and
//! network crates: line lifecycle, section mutations, ordered-station
//! reads, and shortest-path queries.

pub mod error;
pub mod line_service;
pub mod path_service;
pub mod station_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use line_service::{
    LineSummary, add_section, create_line, delete_line, list_lines, ordered_stations,
    remove_station, update_line,
};
pub use path_service::{PathResult, find_path};
pub use station_service::{create_station, delete_station, list_stations};
