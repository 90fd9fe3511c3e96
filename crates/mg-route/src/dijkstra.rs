//! Shortest-path search over the network graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mg_core::StationId;

use crate::error::RouteError;
use crate::graph::NetworkGraph;

/// A computed route: ordered stations plus total distance.
///
/// Derived freshly per query, never mutated in place. The distance is
/// recomputed from the chosen path's edges rather than read back from the
/// search's distance labels, so the result stays independently
/// verifiable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    pub stations: Vec<StationId>,
    pub distance: u64,
}

/// Find a minimum-distance route between two stations.
///
/// Dijkstra over the multigraph; all edge weights are positive. For a
/// fixed graph the result is deterministic: relaxation uses a strict
/// improvement test and incident edges are scanned in stable index
/// order, so equal-distance alternatives always resolve the same way.
pub fn find_route(
    graph: &NetworkGraph,
    source: StationId,
    target: StationId,
) -> Result<RoutePath, RouteError> {
    if source == target {
        return Err(RouteError::SameSourceAndTarget);
    }
    let no_route = RouteError::NoRoute { source, target };
    let (Some(src), Some(dst)) = (graph.vertex(source), graph.vertex(target)) else {
        return Err(no_route);
    };

    let n = graph.station_count();
    let mut dist = vec![u64::MAX; n];
    let mut prev_edge: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[src] = 0;
    heap.push(Reverse((0_u64, src)));

    while let Some(Reverse((d, vertex))) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;
        if vertex == dst {
            break;
        }
        for &edge_ix in graph.incident_edges(vertex) {
            let edge = &graph.edges()[edge_ix];
            let neighbor = edge.opposite(vertex);
            let candidate = d + edge.distance;
            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                prev_edge[neighbor] = Some(edge_ix);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    if !settled[dst] {
        return Err(no_route);
    }

    // Walk the predecessor edges back to the source; prev_edge[src] stays
    // None, which terminates the walk.
    let mut stations = vec![target];
    let mut distance = 0_u64;
    let mut vertex = dst;
    while let Some(edge_ix) = prev_edge[vertex] {
        let edge = &graph.edges()[edge_ix];
        distance += edge.distance;
        vertex = edge.opposite(vertex);
        stations.push(graph.station(vertex));
    }
    stations.reverse();

    Ok(RoutePath { stations, distance })
}
