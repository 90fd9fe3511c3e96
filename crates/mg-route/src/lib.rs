//! mg-route: network graph assembly and shortest-path queries.
//!
//! Provides:
//! - `NetworkGraphBuilder`, a pure transform from all lines' current
//!   segments into one undirected weighted multigraph
//! - `NetworkGraph` with compact adjacency for traversal
//! - `find_route`, a deterministic Dijkstra over the multigraph
//!
//! # Example
//!
//! ```
//! use mg_core::{LineId, StationId};
//! use mg_line::Segment;
//! use mg_route::{NetworkGraphBuilder, find_route};
//!
//! let (a, b, c) = (StationId::new(1), StationId::new(2), StationId::new(3));
//! let (l1, l2) = (LineId::new(1), LineId::new(2));
//!
//! let mut builder = NetworkGraphBuilder::new();
//! builder.add_segment(&Segment::new(l1, a, b, 10).unwrap());
//! builder.add_segment(&Segment::new(l2, a, c, 2).unwrap());
//! builder.add_segment(&Segment::new(l2, c, b, 3).unwrap());
//! let graph = builder.build();
//!
//! let route = find_route(&graph, a, b).unwrap();
//! assert_eq!(route.stations, vec![a, c, b]);
//! assert_eq!(route.distance, 5);
//! ```

pub mod builder;
pub mod dijkstra;
pub mod error;
pub mod graph;

// Re-exports for ergonomics
pub use builder::NetworkGraphBuilder;
pub use dijkstra::{RoutePath, find_route};
pub use error::RouteError;
pub use graph::{NetworkEdge, NetworkGraph};
