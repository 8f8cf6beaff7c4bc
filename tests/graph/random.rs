use std::collections::HashMap;

use rand::Rng;
use waypoint::{Distance, Graph, GraphBuilder, NodeId};

/// Builds a graph with up to `max_nodes` nodes and random edges, zero weights and loops included.
pub fn random_graph(rng: &mut impl Rng, max_nodes: usize, max_weight: u32) -> (Graph, Vec<NodeId>) {
    let node_count = rng.gen_range(1..=max_nodes);
    let edge_count = rng.gen_range(0..=node_count * 3);

    let mut builder = GraphBuilder::with_capacity(node_count);
    let ids: Vec<_> = (0..node_count)
        .map(|i| builder.add_node(format!("N{i}")))
        .collect();

    for _ in 0..edge_count {
        let from = ids[rng.gen_range(0..node_count)];
        let to = ids[rng.gen_range(0..node_count)];
        let distance = Distance::from_units(rng.gen_range(0..=max_weight));
        builder.add_edge(from, to, distance).unwrap();
    }

    (builder.build(), ids)
}

/// Bellman-Ford shortest distances from the origin, unreachable nodes are missing.
pub fn reference_distances(graph: &Graph, origin: NodeId) -> HashMap<NodeId, u64> {
    let mut distances = HashMap::from([(origin, 0u64)]);

    for _ in 0..graph.node_count() {
        let mut changed = false;

        for (from, node) in graph.nodes() {
            let Some(&d) = distances.get(&from) else {
                continue;
            };

            for edge in node.edges() {
                let candidate = d + u64::from(edge.distance().units());
                let current = distances.entry(edge.target()).or_insert(u64::MAX);
                if candidate < *current {
                    *current = candidate;
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }

    distances
}
