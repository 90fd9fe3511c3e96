//! End-to-end service tests over an in-memory network.

use mg_app::{AppError, line_service, path_service, station_service};
use mg_core::StationId;
use mg_line::TopologyError;
use mg_network::{InMemoryNetwork, NetworkError};
use mg_route::RouteError;

/// Three lines sharing transfer stations:
///
/// ```text
/// Museum ----- Green (10) ---- Central
///   |                             |
/// Orange                        Blue
///   |                             |
/// Terminal --- Orange --------- Riverside
/// ```
///
/// Orange is created as Museum-Riverside (5) and then gets Terminal
/// inserted 3 in from Museum.
fn transfer_network() -> (InMemoryNetwork, [mg_core::Station; 4]) {
    let mut network = InMemoryNetwork::new();
    let central = station_service::create_station(&mut network, "Central");
    let riverside = station_service::create_station(&mut network, "Riverside");
    let museum = station_service::create_station(&mut network, "Museum");
    let terminal = station_service::create_station(&mut network, "Terminal");

    line_service::create_line(&mut network, "Blue", "blue", central.id, riverside.id, 10)
        .unwrap();
    line_service::create_line(&mut network, "Green", "green", museum.id, central.id, 10)
        .unwrap();
    let orange =
        line_service::create_line(&mut network, "Orange", "orange", museum.id, riverside.id, 5)
            .unwrap();
    line_service::add_section(&mut network, orange.id, museum.id, terminal.id, 3).unwrap();

    (network, [central, riverside, museum, terminal])
}

#[test]
fn shortest_path_prefers_transfer_route() {
    let (network, [_, riverside, museum, terminal]) = transfer_network();

    let result = path_service::find_path(&network, museum.id, riverside.id).unwrap();
    assert_eq!(
        result.stations,
        vec![museum.clone(), terminal.clone(), riverside.clone()]
    );
    assert_eq!(result.distance, 5);
}

#[test]
fn path_query_with_same_endpoints_rejected() {
    let (network, [central, ..]) = transfer_network();
    assert!(matches!(
        path_service::find_path(&network, central.id, central.id),
        Err(AppError::Route(RouteError::SameSourceAndTarget))
    ));
}

#[test]
fn path_query_with_unknown_station_rejected() {
    let (network, [central, ..]) = transfer_network();
    let ghost = StationId::new(999);
    assert!(matches!(
        path_service::find_path(&network, central.id, ghost),
        Err(AppError::UnknownStation(id)) if id == ghost
    ));
}

#[test]
fn registered_but_unconnected_station_has_no_route() {
    let (mut network, [central, ..]) = transfer_network();
    let depot = station_service::create_station(&mut network, "Depot");

    assert!(matches!(
        path_service::find_path(&network, central.id, depot.id),
        Err(AppError::Route(RouteError::NoRoute { .. }))
    ));
}

#[test]
fn ordered_stations_resolve_through_directory() {
    let (network, [_, riverside, museum, terminal]) = transfer_network();

    let lines = line_service::list_lines(&network).unwrap();
    let orange = lines.iter().find(|l| l.name == "Orange").unwrap();

    let stations = line_service::ordered_stations(&network, orange.id).unwrap();
    let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Museum", "Terminal", "Riverside"]);
    assert_eq!(stations[0], museum);
    assert_eq!(stations[1], terminal);
    assert_eq!(stations[2], riverside);
}

#[test]
fn list_lines_reports_counts_and_distances() {
    let (network, _) = transfer_network();
    let mut lines = line_service::list_lines(&network).unwrap();
    lines.sort_by(|a, b| a.name.cmp(&b.name));

    let orange = lines.iter().find(|l| l.name == "Orange").unwrap();
    assert_eq!(orange.station_count, 3);
    assert_eq!(orange.total_distance, 5);

    let blue = lines.iter().find(|l| l.name == "Blue").unwrap();
    assert_eq!(blue.station_count, 2);
    assert_eq!(blue.total_distance, 10);
}

#[test]
fn remove_station_persists_merged_segment() {
    let (mut network, [_, riverside, museum, terminal]) = transfer_network();
    let lines = line_service::list_lines(&network).unwrap();
    let orange = lines.iter().find(|l| l.name == "Orange").unwrap();

    line_service::remove_station(&mut network, orange.id, terminal.id).unwrap();

    let stations = line_service::ordered_stations(&network, orange.id).unwrap();
    assert_eq!(stations, vec![museum, riverside]);

    let lines = line_service::list_lines(&network).unwrap();
    let orange = lines.iter().find(|l| l.name == "Orange").unwrap();
    assert_eq!(orange.total_distance, 5);
}

#[test]
fn removing_last_station_of_a_line_rejected() {
    let (mut network, [central, riverside, ..]) = transfer_network();
    let lines = line_service::list_lines(&network).unwrap();
    let blue = lines.iter().find(|l| l.name == "Blue").unwrap();

    assert!(matches!(
        line_service::remove_station(&mut network, blue.id, central.id),
        Err(AppError::Topology(TopologyError::LastSegmentRemoval))
    ));

    // The chain is untouched after the rejection.
    let stations = line_service::ordered_stations(&network, blue.id).unwrap();
    assert_eq!(stations, vec![central, riverside]);
}

#[test]
fn duplicate_section_rejected_through_service() {
    let (mut network, [central, riverside, ..]) = transfer_network();
    let lines = line_service::list_lines(&network).unwrap();
    let blue = lines.iter().find(|l| l.name == "Blue").unwrap();

    assert!(matches!(
        line_service::add_section(&mut network, blue.id, riverside.id, central.id, 3),
        Err(AppError::Topology(TopologyError::DuplicateSegment { .. }))
    ));
}

#[test]
fn update_line_changes_attributes_only() {
    let (mut network, _) = transfer_network();
    let lines = line_service::list_lines(&network).unwrap();
    let blue = lines.iter().find(|l| l.name == "Blue").unwrap();

    let updated = line_service::update_line(&mut network, blue.id, "Navy", "navy").unwrap();
    assert_eq!(updated.id, blue.id);
    assert_eq!(updated.name, "Navy");

    let lines = line_service::list_lines(&network).unwrap();
    let navy = lines.iter().find(|l| l.id == blue.id).unwrap();
    assert_eq!(navy.color, "navy");
    assert_eq!(navy.total_distance, 10);
}

#[test]
fn station_delete_blocked_until_lines_release_it() {
    let (mut network, [central, ..]) = transfer_network();

    assert!(matches!(
        station_service::delete_station(&mut network, central.id),
        Err(AppError::Network(NetworkError::StationInUse(_)))
    ));

    let lines = line_service::list_lines(&network).unwrap();
    for line in &lines {
        line_service::delete_line(&mut network, line.id).unwrap();
    }
    station_service::delete_station(&mut network, central.id).unwrap();
}
