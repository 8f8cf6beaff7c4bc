use std::fmt::Debug;
use std::hash::Hash;

use crate::Distance;

/// Directed graph with non-negative edge weights.
/// Should be implemented by the graph the shortest path search runs on.
/// The graph is only read during a search, it must be fully built beforehand.
pub trait DirectedGraph {
    /// Uniquely identify a vertex that belongs to the graph.
    type VertexId: Debug + Copy + Ord + Hash;

    /// Returns true only if the vertex belongs to the graph.
    fn contains_vertex(&self, vertex: Self::VertexId) -> bool;

    /// Gets an iterator over all the outgoing edges from the given vertex.
    /// For each edge returns the edge end vertex and the edge distance.
    /// Returns an empty iterator if the vertex doesn't belong to the graph.
    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::VertexId, Distance)>;

    /// Returns the number of outgoing edges of the vertex.
    fn vertex_out_degree(&self, vertex: Self::VertexId) -> usize {
        self.vertex_exiting_edges(vertex).count()
    }
}

pub mod builder;
pub mod network;
pub mod path;
