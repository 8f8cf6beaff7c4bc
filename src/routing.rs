mod frontier;
mod route;

use tracing::{debug, trace, warn};

use crate::routing::frontier::Frontier;
use crate::routing::route::SearchState;
use crate::{DirectedGraph, Distance, RouteError};

pub use route::{Route, RouteStep};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Paths longer than this distance are not explored.
    pub max_distance: Distance,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_distance: Distance::INFINITY,
        }
    }
}

/// Computes the shortest route from origin to destination with Dijkstra's algorithm.
///
/// Returns `Ok(None)` if the destination cannot be reached from the origin (within the maximum
/// distance of the configuration). Returns an error if the origin or the destination do not
/// belong to the graph, or if the search follows an edge into a vertex outside of the graph.
///
/// When several routes have the same shortest distance the one discovered first is returned:
/// vertices at the same distance are visited in the order they were (last) queued.
pub fn shortest_path<G: DirectedGraph>(
    config: &ShortestPathConfig,
    graph: &G,
    origin: G::VertexId,
    destination: G::VertexId,
) -> Result<Option<Route<G::VertexId>>, RouteError<G::VertexId>> {
    debug!("Computing shortest path {origin:?} -> {destination:?} with {config:?}");

    if !graph.contains_vertex(origin) {
        return Err(RouteError::OriginNotFound(origin));
    }

    if !graph.contains_vertex(destination) {
        return Err(RouteError::DestinationNotFound(destination));
    }

    let mut state = SearchState::new(origin);

    // priority queue of discovered vertices that may need to be visited
    let mut frontier = Frontier::new();
    frontier.upsert(origin, Distance::ZERO);

    while let Some((vertex, distance)) = frontier.pop() {
        if vertex == destination {
            let route = state.unpack_route(destination);
            debug!("Found route of length {distance} with {} steps", route.len());
            return Ok(Some(route));
        }

        for (vertex_to, edge_distance) in graph.vertex_exiting_edges(vertex) {
            if !graph.contains_vertex(vertex_to) {
                return Err(RouteError::DanglingEdge(vertex, vertex_to));
            }

            let Some(candidate) = distance.checked_add(edge_distance) else {
                warn!("Distance overflow following {vertex:?} -> {vertex_to:?}");
                continue;
            };

            if candidate > config.max_distance {
                continue;
            }

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if candidate < state.distance(vertex_to) {
                trace!("Relax {vertex_to:?} via {vertex:?}: {candidate}");
                state.relax(vertex_to, vertex, candidate);
                frontier.upsert(vertex_to, candidate);
            }
        }
    }

    debug!("No route found {origin:?} -> {destination:?}");
    Ok(None)
}
