//! Segment value type.

use mg_core::{LineId, StationId};

use crate::error::TopologyError;

/// A directed up-station/down-station pair with a positive distance, the
/// atomic unit of a line's path.
///
/// Segments are plain value records: no surrogate key and no back-pointer
/// to the owning line beyond `line_id`. Within a valid chain each
/// up-station and each down-station appears at most once, so the endpoint
/// pair identifies a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub line_id: LineId,
    pub up: StationId,
    pub down: StationId,
    pub distance: u64,
}

impl Segment {
    /// Create a segment, enforcing `distance > 0` and `up != down`.
    pub fn new(
        line_id: LineId,
        up: StationId,
        down: StationId,
        distance: u64,
    ) -> Result<Self, TopologyError> {
        if distance == 0 {
            return Err(TopologyError::ZeroDistance);
        }
        if up == down {
            return Err(TopologyError::SelfLoop(up));
        }
        Ok(Self {
            line_id,
            up,
            down,
            distance,
        })
    }

    /// Whether the station is one of this segment's endpoints.
    pub fn touches(&self, station: StationId) -> bool {
        self.up == station || self.down == station
    }
}
