//! Integration tests for cross-line route queries.
//!
//! Network under test, three lines sharing transfer stations:
//!
//! ```text
//! Museum ----- L2 (10) ----- Central
//!   |                           |
//!   L3                          L1
//!   |                           |
//! Terminal --- L3 ----------- Riverside
//! ```
//!
//! L3 runs Museum-Terminal-Riverside with a station inserted mid-line.

use mg_core::{LineId, StationId};
use mg_line::LineTopology;
use mg_route::{NetworkGraphBuilder, RouteError, find_route};

const CENTRAL: StationId = StationId::new(1);
const RIVERSIDE: StationId = StationId::new(2);
const MUSEUM: StationId = StationId::new(3);
const TERMINAL: StationId = StationId::new(4);

fn build_network() -> Vec<LineTopology> {
    let l1 = LineTopology::create(LineId::new(1), CENTRAL, RIVERSIDE, 10).unwrap();
    let l2 = LineTopology::create(LineId::new(2), MUSEUM, CENTRAL, 10).unwrap();
    let mut l3 = LineTopology::create(LineId::new(3), MUSEUM, RIVERSIDE, 5).unwrap();
    l3.insert_section(MUSEUM, TERMINAL, 3).unwrap();
    vec![l1, l2, l3]
}

fn graph_of(lines: &[LineTopology]) -> mg_route::NetworkGraph {
    let mut builder = NetworkGraphBuilder::new();
    for line in lines {
        builder.add_line(line);
    }
    builder.build()
}

#[test]
fn shortest_route_crosses_lines() {
    let lines = build_network();
    let graph = graph_of(&lines);

    let route = find_route(&graph, MUSEUM, RIVERSIDE).unwrap();
    assert_eq!(route.stations, vec![MUSEUM, TERMINAL, RIVERSIDE]);
    assert_eq!(route.distance, 5);
}

#[test]
fn transfer_route_beats_single_line() {
    let lines = build_network();
    let graph = graph_of(&lines);

    // Central to Terminal: direct walk along L2+L3 head (10 + 3 = 13)
    // loses to L1 + L3 tail (10 + 2 = 12).
    let route = find_route(&graph, CENTRAL, TERMINAL).unwrap();
    assert_eq!(route.stations, vec![CENTRAL, RIVERSIDE, TERMINAL]);
    assert_eq!(route.distance, 12);
}

#[test]
fn route_is_stable_across_rebuilds() {
    let lines = build_network();
    let first = find_route(&graph_of(&lines), CENTRAL, TERMINAL).unwrap();
    for _ in 0..5 {
        let again = find_route(&graph_of(&lines), CENTRAL, TERMINAL).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn station_on_no_line_yields_no_route() {
    let lines = build_network();
    let graph = graph_of(&lines);

    let isolated = StationId::new(99);
    assert_eq!(
        find_route(&graph, CENTRAL, isolated),
        Err(RouteError::NoRoute {
            source: CENTRAL,
            target: isolated,
        })
    );
}

#[test]
fn same_station_query_is_rejected() {
    let lines = build_network();
    let graph = graph_of(&lines);
    assert_eq!(
        find_route(&graph, CENTRAL, CENTRAL),
        Err(RouteError::SameSourceAndTarget)
    );
}
