use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum GraphError {
    #[error("Node {0:?} does not belong to the graph")]
    NodeNotFound(NodeId),
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum RouteError<VertexId> {
    #[error("Origin vertex {0:?} does not belong to the graph")]
    OriginNotFound(VertexId),
    #[error("Destination vertex {0:?} does not belong to the graph")]
    DestinationNotFound(VertexId),
    #[error("Edge {0:?} -> {1:?} enters a vertex that does not belong to the graph")]
    DanglingEdge(VertexId, VertexId),
}
