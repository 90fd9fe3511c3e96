//! Line lifecycle, section mutations, and ordered-station reads.

use mg_core::{LineId, Station, StationId};
use mg_line::{Line, LineTopology};
use mg_network::{InMemoryNetwork, LineStore, StationDirectory};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Summary of a line for listing.
#[derive(Debug, Clone)]
pub struct LineSummary {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub station_count: usize,
    pub total_distance: u64,
}

/// Create a line together with its first segment.
pub fn create_line(
    network: &mut InMemoryNetwork,
    name: &str,
    color: &str,
    up: StationId,
    down: StationId,
    distance: u64,
) -> AppResult<Line> {
    resolve_station(network, up)?;
    resolve_station(network, down)?;
    let line = network.create_line(name, color, up, down, distance)?;
    info!(line = %line.id, %up, %down, distance, "line created");
    Ok(line)
}

/// Update a line's display attributes.
pub fn update_line(
    network: &mut InMemoryNetwork,
    id: LineId,
    name: &str,
    color: &str,
) -> AppResult<Line> {
    Ok(network.update_line(id, name, color)?)
}

/// Destroy a line and all of its segments.
pub fn delete_line(network: &mut InMemoryNetwork, id: LineId) -> AppResult<()> {
    network.delete_line(id)?;
    info!(line = %id, "line deleted");
    Ok(())
}

/// Add a section to a line, splitting an existing segment when the new
/// station lands inside one. The resulting changeset is persisted
/// atomically through the store.
pub fn add_section<S>(
    store: &mut S,
    line_id: LineId,
    up_id: StationId,
    down_id: StationId,
    distance: u64,
) -> AppResult<()>
where
    S: LineStore + StationDirectory,
{
    let up = resolve_station(store, up_id)?;
    let down = resolve_station(store, down_id)?;

    let segments = store.load_segments(line_id)?;
    let mut topology = LineTopology::from_segments(line_id, segments)?;
    let change = topology.insert_section(up.id, down.id, distance)?;
    store.save_segments(line_id, &change)?;

    info!(line = %line_id, up = %up.id, down = %down.id, distance, "section added");
    Ok(())
}

/// Remove a station from a line, merging its adjoining segments when the
/// station is internal.
pub fn remove_station<S>(store: &mut S, line_id: LineId, station: StationId) -> AppResult<()>
where
    S: LineStore + StationDirectory,
{
    let segments = store.load_segments(line_id)?;
    let mut topology = LineTopology::from_segments(line_id, segments)?;
    let change = topology.remove_station(station)?;
    store.save_segments(line_id, &change)?;

    info!(line = %line_id, %station, "station removed from line");
    Ok(())
}

/// The line's chain as resolved stations, head to tail.
pub fn ordered_stations<S>(store: &S, line_id: LineId) -> AppResult<Vec<Station>>
where
    S: LineStore + StationDirectory,
{
    let segments = store.load_segments(line_id)?;
    let topology = LineTopology::from_segments(line_id, segments)?;

    let ids = topology.ordered_stations();
    let resolved = store.resolve_many(&ids);
    ids.iter()
        .map(|id| {
            resolved
                .get(id)
                .cloned()
                .ok_or(AppError::UnknownStation(*id))
        })
        .collect()
}

/// List all lines with summaries.
pub fn list_lines(store: &impl LineStore) -> AppResult<Vec<LineSummary>> {
    let mut summaries = Vec::new();
    for (line, segments) in store.load_all_lines()? {
        let topology = LineTopology::from_segments(line.id, segments)?;
        summaries.push(LineSummary {
            id: line.id,
            name: line.name,
            color: line.color,
            station_count: topology.segment_count() + 1,
            total_distance: topology.total_distance(),
        });
    }
    Ok(summaries)
}

pub(crate) fn resolve_station(
    directory: &impl StationDirectory,
    id: StationId,
) -> AppResult<Station> {
    directory.resolve(id).ok_or(AppError::UnknownStation(id))
}
