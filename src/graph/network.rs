use rustc_hash::FxHashMap;

use crate::{DirectedGraph, Distance};

/// Stable handle of a node stored in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Directed and weighted link from its (implicit) source node to the target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(crate) target: NodeId,
    pub(crate) distance: Distance,
}

impl Edge {
    pub const fn target(&self) -> NodeId {
        self.target
    }

    pub const fn distance(&self) -> Distance {
        self.distance
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) edges: Vec<Edge>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges in the order they were added.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Immutable arena of named nodes, see [`GraphBuilder`](crate::GraphBuilder).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) names: FxHashMap<String, NodeId>,
}

impl Graph {
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.index())
    }

    /// Gets the first node that was added with the given name.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index as u32), node))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl DirectedGraph for Graph {
    type VertexId = NodeId;

    fn contains_vertex(&self, vertex: NodeId) -> bool {
        vertex.index() < self.nodes.len()
    }

    fn vertex_exiting_edges(&self, vertex: NodeId) -> impl Iterator<Item = (NodeId, Distance)> {
        self.node(vertex)
            .into_iter()
            .flat_map(|node| node.edges.iter().map(|edge| (edge.target, edge.distance)))
    }

    fn vertex_out_degree(&self, vertex: NodeId) -> usize {
        self.node(vertex).map_or(0, |node| node.edges.len())
    }
}
