use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::Distance;

/// A vertex of a route with the cumulative distance from the route origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStep<VertexId> {
    pub vertex: VertexId,
    pub distance: Distance,
}

/// Shortest route from an origin to a destination vertex.
/// Always contains at least the origin, whose distance is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<VertexId> {
    steps: Vec<RouteStep<VertexId>>,
}

impl<VertexId: Copy> Route<VertexId> {
    pub(crate) const fn from_steps(steps: Vec<RouteStep<VertexId>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[RouteStep<VertexId>] {
        &self.steps
    }

    pub fn origin(&self) -> Option<VertexId> {
        self.steps.first().map(|step| step.vertex)
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.steps.last().map(|step| step.vertex)
    }

    /// Total distance from origin to destination.
    pub fn distance(&self) -> Distance {
        self.steps
            .last()
            .map_or(Distance::ZERO, |step| step.distance)
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.steps.iter().map(|step| step.vertex)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteStep<VertexId>> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<VertexId> IntoIterator for Route<VertexId> {
    type Item = RouteStep<VertexId>;
    type IntoIter = std::vec::IntoIter<RouteStep<VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, VertexId> IntoIterator for &'a Route<VertexId> {
    type Item = &'a RouteStep<VertexId>;
    type IntoIter = std::slice::Iter<'a, RouteStep<VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Best known way to reach a vertex during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reached<VertexId> {
    /// Vertex preceding this one on the best known path, None for the origin.
    pub previous: Option<VertexId>,
    /// Shortest distance from the origin found so far.
    pub distance: Distance,
}

/// Per search bookkeeping: vertices missing from the state are unreached (infinite distance).
#[derive(Debug)]
pub(crate) struct SearchState<VertexId> {
    reached: FxHashMap<VertexId, Reached<VertexId>>,
}

impl<VertexId: Copy + Eq + Hash> SearchState<VertexId> {
    pub(crate) fn new(origin: VertexId) -> Self {
        let origin_reached = Reached {
            previous: None,
            distance: Distance::ZERO,
        };

        Self {
            reached: FxHashMap::from_iter([(origin, origin_reached)]),
        }
    }

    pub(crate) fn distance(&self, vertex: VertexId) -> Distance {
        self.reached
            .get(&vertex)
            .map_or(Distance::INFINITY, |reached| reached.distance)
    }

    /// Records a shorter path reaching the vertex through `previous`.
    pub(crate) fn relax(&mut self, vertex: VertexId, previous: VertexId, distance: Distance) {
        let previous = Some(previous);
        self.reached.insert(vertex, Reached { previous, distance });
    }

    /// Unpacks the shortest route from destination back to origin.
    pub(crate) fn unpack_route(&self, destination: VertexId) -> Route<VertexId> {
        let mut steps = vec![];
        let mut next = Some(destination);

        while let Some(vertex) = next {
            let Some(reached) = self.reached.get(&vertex) else {
                break;
            };

            steps.push(RouteStep {
                vertex,
                distance: reached.distance,
            });
            next = reached.previous;
        }

        steps.reverse();
        Route::from_steps(steps)
    }
}
