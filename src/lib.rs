#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;

pub use error::{GraphError, RouteError};
pub use graph::DirectedGraph;
pub use graph::builder::GraphBuilder;
pub use graph::network::{Edge, Graph, Node, NodeId};
pub use graph::path::is_route_connected;
pub use model::Distance;
pub use routing::{Route, RouteStep, ShortestPathConfig, shortest_path};
