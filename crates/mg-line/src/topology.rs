//! Line topology: the ordered segment chain and its mutations.

use mg_core::{LineId, StationId};

use crate::changeset::SectionChange;
use crate::error::TopologyError;
use crate::segment::Segment;
use crate::validate;

/// Owner of a line's segment chain.
///
/// The chain always forms exactly one simple path: no branching, no
/// cycle, no disconnected sub-chains. Mutations go through
/// [`insert_section`](LineTopology::insert_section) and
/// [`remove_station`](LineTopology::remove_station), which apply the
/// change in memory and return the [`SectionChange`] the caller must
/// persist atomically.
///
/// Mutations on one topology are read-then-write over the full chain and
/// must be serialized by the caller; topologies of different lines are
/// independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTopology {
    line_id: LineId,
    segments: Vec<Segment>,
}

impl LineTopology {
    /// Create a line's topology together with its first segment.
    pub fn create(
        line_id: LineId,
        up: StationId,
        down: StationId,
        distance: u64,
    ) -> Result<Self, TopologyError> {
        let first = Segment::new(line_id, up, down, distance)?;
        Ok(Self {
            line_id,
            segments: vec![first],
        })
    }

    /// Rebuild a topology from stored segments, revalidating the chain.
    ///
    /// A corrupt chain (branching, cycle, disjoint sub-chains, foreign or
    /// degenerate segments) is a typed error; it is never accepted and
    /// repaired silently.
    pub fn from_segments(
        line_id: LineId,
        segments: Vec<Segment>,
    ) -> Result<Self, TopologyError> {
        validate::validate_chain(line_id, &segments)?;
        Ok(Self { line_id, segments })
    }

    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Sum of all segment distances.
    pub fn total_distance(&self) -> u64 {
        self.segments.iter().map(|s| s.distance).sum()
    }

    /// Whether the station is an endpoint of any segment on this line.
    pub fn contains(&self, station: StationId) -> bool {
        self.segments.iter().any(|s| s.touches(station))
    }

    /// The chain as an ordered station sequence.
    ///
    /// Walks backward from an arbitrary segment's up-station to the head
    /// (the station that is nobody's down-station), then forward segment
    /// by segment to the tail. Empty if the line has no segments; that
    /// state is unreachable through the public mutations but is handled
    /// rather than assumed away.
    pub fn ordered_stations(&self) -> Vec<StationId> {
        let Some(first) = self.segments.first() else {
            return Vec::new();
        };

        let mut head = first.up;
        while let Some(previous) = self.segment_into(head) {
            head = previous.up;
        }

        let mut stations = vec![head];
        let mut current = head;
        while let Some(next) = self.segment_out_of(current) {
            current = next.down;
            stations.push(current);
        }
        stations
    }

    /// Insert a section, keeping the chain a single simple path.
    ///
    /// Exactly one endpoint must already be on the line (unless the line
    /// is empty, in which case the section becomes the first segment).
    /// Inserting at an internal station splits the existing segment; the
    /// new distance must be strictly smaller than the split segment's so
    /// the remainder stays positive. Inserting beyond the head or tail
    /// extends the chain without a split.
    pub fn insert_section(
        &mut self,
        up: StationId,
        down: StationId,
        distance: u64,
    ) -> Result<SectionChange, TopologyError> {
        let new_segment = Segment::new(self.line_id, up, down, distance)?;

        let up_exists = self.contains(up);
        let down_exists = self.contains(down);
        if up_exists && down_exists {
            return Err(TopologyError::DuplicateSegment { up, down });
        }
        if !self.segments.is_empty() && !up_exists && !down_exists {
            return Err(TopologyError::DisconnectedSegment { up, down });
        }

        let mut change = SectionChange::default();

        if up_exists {
            // Up-station has an outgoing segment: split it. Otherwise the
            // up-station is the tail and the chain simply extends.
            if let Some(pos) = self.segments.iter().position(|s| s.up == up) {
                let old = self.segments[pos].clone();
                if distance >= old.distance {
                    return Err(TopologyError::DistanceTooLarge {
                        requested: distance,
                        available: old.distance,
                    });
                }
                let remainder =
                    Segment::new(self.line_id, down, old.down, old.distance - distance)?;
                self.segments[pos] = remainder.clone();
                change.to_delete.push(old);
                change.to_create.push(remainder);
            }
        } else if down_exists {
            // Symmetric: split the incoming segment of the down-station,
            // or prepend when the down-station is the head.
            if let Some(pos) = self.segments.iter().position(|s| s.down == down) {
                let old = self.segments[pos].clone();
                if distance >= old.distance {
                    return Err(TopologyError::DistanceTooLarge {
                        requested: distance,
                        available: old.distance,
                    });
                }
                let remainder =
                    Segment::new(self.line_id, old.up, up, old.distance - distance)?;
                self.segments[pos] = remainder.clone();
                change.to_delete.push(old);
                change.to_create.push(remainder);
            }
        }

        self.segments.push(new_segment.clone());
        change.to_create.push(new_segment);
        Ok(change)
    }

    /// Remove a station, merging its adjoining segments when internal.
    ///
    /// An endpoint station takes its single adjoining segment with it; an
    /// internal station's two neighbors are replaced by one merged
    /// segment whose distance is their sum. Rejected when the line has
    /// only one segment or the station is not on the line.
    pub fn remove_station(
        &mut self,
        station: StationId,
    ) -> Result<SectionChange, TopologyError> {
        if self.segments.len() <= 1 {
            return Err(TopologyError::LastSegmentRemoval);
        }

        let incoming = self.segments.iter().position(|s| s.down == station);
        let outgoing = self.segments.iter().position(|s| s.up == station);

        let mut change = SectionChange::default();
        match (incoming, outgoing) {
            (Some(i), Some(o)) => {
                let seg_in = self.segments[i].clone();
                let seg_out = self.segments[o].clone();
                let merged = Segment::new(
                    self.line_id,
                    seg_in.up,
                    seg_out.down,
                    seg_in.distance + seg_out.distance,
                )?;
                self.segments.remove(i.max(o));
                self.segments.remove(i.min(o));
                self.segments.push(merged.clone());
                change.to_delete.push(seg_in);
                change.to_delete.push(seg_out);
                change.to_create.push(merged);
            }
            (Some(only), None) | (None, Some(only)) => {
                let removed = self.segments.remove(only);
                change.to_delete.push(removed);
            }
            (None, None) => return Err(TopologyError::StationNotOnLine(station)),
        }
        Ok(change)
    }

    fn segment_out_of(&self, station: StationId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.up == station)
    }

    fn segment_into(&self, station: StationId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.down == station)
    }
}
