use tracing::debug;

use crate::graph::network::{Edge, Graph, Node, NodeId};
use crate::{Distance, GraphError};

/// Two-phase construction of a [`Graph`].
///
/// All the nodes are registered first, so that edges can refer to any node (cycles included)
/// through its [`NodeId`]. Once built the graph can no longer be modified.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            graph: Graph {
                nodes: Vec::with_capacity(nodes),
                names: Default::default(),
            },
        }
    }

    /// Registers a new node without outgoing edges.
    /// Names are not deduplicated: adding the same name twice yields two distinct nodes.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.graph.nodes.len() as u32);
        let name = name.into();

        self.graph.names.entry(name.clone()).or_insert(id);
        self.graph.nodes.push(Node {
            name,
            edges: vec![],
        });

        id
    }

    /// Appends a directed edge to the outgoing edges of the `from` node.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        distance: Distance,
    ) -> Result<(), GraphError> {
        if self.graph.node(to).is_none() {
            debug!("Cannot add edge {from:?} -> {to:?}: unknown target");
            return Err(GraphError::NodeNotFound(to));
        }

        let node = self
            .graph
            .nodes
            .get_mut(from.index())
            .ok_or(GraphError::NodeNotFound(from))?;

        node.edges.push(Edge {
            target: to,
            distance,
        });

        Ok(())
    }

    /// Adds two directed edges with the same distance: `a -> b` and `b -> a`.
    pub fn add_bidirectional_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        distance: Distance,
    ) -> Result<(), GraphError> {
        if self.graph.node(a).is_none() {
            return Err(GraphError::NodeNotFound(a));
        }

        self.add_edge(a, b, distance)?;
        self.add_edge(b, a, distance)
    }

    pub fn build(self) -> Graph {
        debug!(
            "Built graph with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }
}
