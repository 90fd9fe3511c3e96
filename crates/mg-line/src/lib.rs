//! mg-line: per-line topology model and mutation algorithms.
//!
//! Provides:
//! - `Segment`/`Line` value records
//! - `LineTopology`, the sole owner of a line's segment chain
//! - insert/remove mutations that keep the chain a single simple path
//! - explicit `SectionChange` changesets for the persistence boundary
//!
//! # Example
//!
//! ```
//! use mg_core::{LineId, StationId};
//! use mg_line::LineTopology;
//!
//! let (a, b, c) = (StationId::new(1), StationId::new(2), StationId::new(3));
//! let mut topology = LineTopology::create(LineId::new(1), a, b, 10).unwrap();
//! topology.insert_section(a, c, 4).unwrap();
//!
//! assert_eq!(topology.ordered_stations(), vec![a, c, b]);
//! assert_eq!(topology.total_distance(), 10);
//! ```

pub mod changeset;
pub mod error;
pub mod line;
pub mod segment;
pub mod topology;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use changeset::SectionChange;
pub use error::TopologyError;
pub use line::Line;
pub use segment::Segment;
pub use topology::LineTopology;
