//! Chain validation logic.

use std::collections::{HashMap, HashSet};

use mg_core::{LineId, StationId};

use crate::error::TopologyError;
use crate::segment::Segment;

/// Validate that a segment set forms exactly one simple path.
///
/// Checks, in order: every segment carries the expected line id and
/// satisfies the per-segment invariants; no station has two outgoing or
/// two incoming segments; exactly one head station exists; walking
/// forward from the head visits every segment. An empty set is valid
/// here; emptiness is rejected at the construction sites that forbid it.
pub(crate) fn validate_chain(line_id: LineId, segments: &[Segment]) -> Result<(), TopologyError> {
    for segment in segments {
        if segment.line_id != line_id {
            return Err(TopologyError::ForeignSegment {
                expected: line_id,
                actual: segment.line_id,
            });
        }
        if segment.distance == 0 {
            return Err(TopologyError::ZeroDistance);
        }
        if segment.up == segment.down {
            return Err(TopologyError::SelfLoop(segment.up));
        }
    }

    let mut ups: HashSet<StationId> = HashSet::new();
    let mut downs: HashSet<StationId> = HashSet::new();
    for segment in segments {
        if !ups.insert(segment.up) {
            return Err(TopologyError::Branching(segment.up));
        }
        if !downs.insert(segment.down) {
            return Err(TopologyError::Branching(segment.down));
        }
    }

    if segments.is_empty() {
        return Ok(());
    }

    // The head is the one up-station that is nobody's down-station.
    let head = segments
        .iter()
        .map(|s| s.up)
        .find(|up| !downs.contains(up))
        .ok_or(TopologyError::CyclicChain)?;

    // With unique up-stations the forward walk is a function; it must
    // cover every segment or the set splits into sub-chains.
    let by_up: HashMap<StationId, &Segment> =
        segments.iter().map(|s| (s.up, s)).collect();
    let mut visited = 0;
    let mut current = head;
    while let Some(segment) = by_up.get(&current) {
        visited += 1;
        current = segment.down;
    }
    if visited != segments.len() {
        return Err(TopologyError::DisjointChain);
    }

    Ok(())
}
