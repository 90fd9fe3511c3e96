//! Station registry operations.

use mg_core::{Station, StationId};
use mg_network::InMemoryNetwork;
use tracing::info;

use crate::error::AppResult;

/// Register a new station.
pub fn create_station(network: &mut InMemoryNetwork, name: &str) -> Station {
    let station = network.create_station(name);
    info!(station = %station.id, name, "station created");
    station
}

/// Delete a station. Rejected while any line still references it.
pub fn delete_station(network: &mut InMemoryNetwork, id: StationId) -> AppResult<()> {
    network.delete_station(id)?;
    info!(station = %id, "station deleted");
    Ok(())
}

/// List all registered stations.
pub fn list_stations(network: &InMemoryNetwork) -> Vec<Station> {
    network.list_stations()
}
