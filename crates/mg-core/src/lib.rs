//! mg-core: stable foundation for metrograph.
//!
//! Contains:
//! - ids (stable identifiers for stations and lines)
//! - station (shared station value type)

pub mod ids;
pub mod station;

// Re-exports: nice ergonomics for downstream crates
pub use ids::{LineId, StationId};
pub use station::Station;
