use std::cmp::Reverse;
use std::hash::Hash;

use keyed_priority_queue::KeyedPriorityQueue;

use crate::Distance;

/// Min priority queue of the discovered vertices that still need to be visited.
///
/// Each vertex is queued at most once: pushing an already queued vertex replaces its priority
/// (decrease-key), so no stale entries are ever popped. Vertices with the same distance are
/// popped in insertion order, where an upsert counts as a new insertion.
pub(crate) struct Frontier<VertexId: Hash + Eq> {
    queue: KeyedPriorityQueue<VertexId, Reverse<(Distance, u64)>>,
    sequence: u64,
}

impl<VertexId: Hash + Eq> Frontier<VertexId> {
    pub(crate) fn new() -> Self {
        Self {
            queue: KeyedPriorityQueue::new(),
            sequence: 0,
        }
    }

    /// Inserts the vertex, or updates its priority if it is already queued.
    pub(crate) fn upsert(&mut self, vertex: VertexId, distance: Distance) {
        self.sequence += 1;
        self.queue.push(vertex, Reverse((distance, self.sequence)));
    }

    /// Removes the vertex with the smallest distance.
    pub(crate) fn pop(&mut self) -> Option<(VertexId, Distance)> {
        let (vertex, Reverse((distance, _))) = self.queue.pop()?;
        Some((vertex, distance))
    }
}

#[cfg(test)]
impl<VertexId: Hash + Eq> Frontier<VertexId> {
    fn len(&self) -> usize {
        self.queue.len()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
