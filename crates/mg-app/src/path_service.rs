//! Shortest-path query service.

use mg_core::{Station, StationId};
use mg_line::LineTopology;
use mg_network::{LineStore, StationDirectory};
use mg_route::{NetworkGraphBuilder, RouteError, find_route};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::line_service::resolve_station;

/// A resolved shortest path: ordered stations plus total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub stations: Vec<Station>,
    pub distance: u64,
}

/// Find the minimum-distance route between two stations across all lines.
///
/// The graph is rebuilt from current topology state on every call; there
/// is no incremental maintenance to invalidate.
pub fn find_path<S>(store: &S, source: StationId, target: StationId) -> AppResult<PathResult>
where
    S: LineStore + StationDirectory,
{
    if source == target {
        return Err(RouteError::SameSourceAndTarget.into());
    }
    resolve_station(store, source)?;
    resolve_station(store, target)?;

    let mut builder = NetworkGraphBuilder::new();
    for (line, segments) in store.load_all_lines()? {
        let topology = LineTopology::from_segments(line.id, segments)?;
        builder.add_line(&topology);
    }
    let graph = builder.build();

    let route = find_route(&graph, source, target)?;
    debug!(%source, %target, distance = route.distance, "path found");

    let resolved = store.resolve_many(&route.stations);
    let stations = route
        .stations
        .iter()
        .map(|id| {
            resolved
                .get(id)
                .cloned()
                .ok_or(AppError::UnknownStation(*id))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(PathResult {
        stations,
        distance: route.distance,
    })
}
