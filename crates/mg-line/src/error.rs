//! Topology-specific error types.

use mg_core::{LineId, StationId};
use thiserror::Error;

/// Business-rule violations raised by line topology operations.
///
/// Every variant is detected synchronously and returned to the immediate
/// caller. None of these are transient; retrying does not help.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Insertion where both endpoints are already connected on the line.
    #[error("segment already connected: both {up} and {down} are on the line")]
    DuplicateSegment { up: StationId, down: StationId },

    /// Insertion where neither endpoint exists on a non-empty line.
    #[error("segment not connected to line: neither {up} nor {down} is on the line")]
    DisconnectedSegment { up: StationId, down: StationId },

    /// Split-insert distance must be strictly smaller than the segment
    /// being split, so the remainder stays positive.
    #[error("distance {requested} exceeds existing segment length {available}")]
    DistanceTooLarge { requested: u64, available: u64 },

    /// Removing the station would leave the line without segments.
    #[error("cannot remove last station from a line")]
    LastSegmentRemoval,

    /// Remove-station target is absent from the line's chain.
    #[error("station {0} is not on the line")]
    StationNotOnLine(StationId),

    /// Segment distances are positive integers.
    #[error("segment distance must be positive")]
    ZeroDistance,

    /// A segment never spans a station to itself.
    #[error("segment endpoints must differ: {0}")]
    SelfLoop(StationId),

    /// A segment loaded into a topology belongs to a different line.
    #[error("segment belongs to line {actual}, expected {expected}")]
    ForeignSegment { expected: LineId, actual: LineId },

    /// A station has two outgoing or two incoming segments within the line.
    #[error("station {0} has more than one incoming or outgoing segment")]
    Branching(StationId),

    /// The segments form a closed loop with no head station.
    #[error("line segments form a cycle")]
    CyclicChain,

    /// The segments split into disconnected sub-chains.
    #[error("line segments do not form a single connected chain")]
    DisjointChain,
}
