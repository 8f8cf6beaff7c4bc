use tracing::debug;

use crate::{DirectedGraph, Distance, Route};

/// Returns true only if all the steps of the route are sequentially connected in the given graph.
///
/// Two consecutive steps are connected when the graph has an edge from the first vertex to the
/// second one whose distance equals the difference between their cumulative distances.
/// The route must also start at distance zero.
pub fn is_route_connected<G: DirectedGraph>(graph: &G, route: &Route<G::VertexId>) -> bool {
    if route.steps().first().map(|step| step.distance) != Some(Distance::ZERO) {
        return false;
    }

    for window in route.steps().windows(2) {
        let [s1, s2] = [window[0], window[1]];

        let Some(expected) = s2.distance.checked_sub(s1.distance) else {
            debug!("Route distance decreases from {s1:?} to {s2:?}");
            return false;
        };

        if !graph
            .vertex_exiting_edges(s1.vertex)
            .any(|(v, distance)| v == s2.vertex && distance == expected)
        {
            debug!("No edge of length {expected} from {s1:?} to {s2:?}");
            return false;
        }
    }

    true
}
