//! Graph assembly from line topologies.

use std::collections::HashMap;

use mg_core::StationId;
use mg_line::{LineTopology, Segment};

use crate::graph::{NetworkEdge, NetworkGraph};

/// Assembles segments from all lines into a single [`NetworkGraph`].
///
/// This is a pure, stateless transform over current topology state:
/// callers rebuild the graph for every path query instead of maintaining
/// it incrementally. Vertex indices are assigned in first-seen order and
/// edges keep their insertion order, so the same input always produces
/// the same graph.
#[derive(Debug, Default)]
pub struct NetworkGraphBuilder {
    stations: Vec<StationId>,
    index: HashMap<StationId, usize>,
    edges: Vec<NetworkEdge>,
}

impl NetworkGraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every segment of a line's current chain.
    pub fn add_line(&mut self, topology: &LineTopology) {
        for segment in topology.segments() {
            self.add_segment(segment);
        }
    }

    /// Add one segment as an undirected weighted edge.
    pub fn add_segment(&mut self, segment: &Segment) {
        let up = self.intern(segment.up);
        let down = self.intern(segment.down);
        self.edges.push(NetworkEdge {
            line_id: segment.line_id,
            endpoints: [up, down],
            distance: segment.distance,
        });
    }

    /// Freeze into a graph with compact adjacency lists.
    pub fn build(self) -> NetworkGraph {
        // Group edge indices by endpoint vertex
        let mut vertex_to_edges: HashMap<usize, Vec<usize>> = HashMap::new();
        for (edge_ix, edge) in self.edges.iter().enumerate() {
            vertex_to_edges
                .entry(edge.endpoints[0])
                .or_default()
                .push(edge_ix);
            vertex_to_edges
                .entry(edge.endpoints[1])
                .or_default()
                .push(edge_ix);
        }

        // Sort each vertex's edge list for determinism
        for edge_list in vertex_to_edges.values_mut() {
            edge_list.sort_unstable();
        }

        // Build offsets and flat list
        let mut offsets = Vec::with_capacity(self.stations.len() + 1);
        let mut adjacency = Vec::new();
        offsets.push(0);
        for vertex in 0..self.stations.len() {
            if let Some(edge_list) = vertex_to_edges.get(&vertex) {
                adjacency.extend_from_slice(edge_list);
            }
            offsets.push(adjacency.len());
        }

        NetworkGraph {
            stations: self.stations,
            index: self.index,
            edges: self.edges,
            offsets,
            adjacency,
        }
    }

    fn intern(&mut self, station: StationId) -> usize {
        if let Some(&vertex) = self.index.get(&station) {
            return vertex;
        }
        let vertex = self.stations.len();
        self.stations.push(station);
        self.index.insert(station, vertex);
        vertex
    }
}
