// Nearest-first priority collection used for pickups and customers

use priority_queue::PriorityQueue;
use std::cmp::Ordering;
use std::hash::Hash;

use crate::models::Distance;

// Custom wrapper to make f64 implement Eq
#[derive(PartialEq, Copy, Clone, Debug)]
struct F64Wrapper(f64);

impl Eq for F64Wrapper {}

impl PartialOrd for F64Wrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F64Wrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// Priority of a queued item: nearer first, then earlier insertion first
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
struct QueueKey {
    distance: F64Wrapper,
    sequence: usize,
}

impl Ord for QueueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order so the max-priority queue pops the nearest item
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of items ordered by a precomputed distance.
///
/// Cloning produces an independent copy: popping from the clone leaves the
/// original untouched.
#[derive(Clone, Debug)]
pub struct NearestQueue<I: Hash + Eq> {
    queue: PriorityQueue<I, QueueKey>,
    next_sequence: usize,
}

impl<I: Hash + Eq> NearestQueue<I> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    /// Inserts an item with its distance to the queue's reference point.
    /// Re-inserting an item already queued replaces its priority.
    pub fn push(&mut self, item: I, distance: Distance) {
        let key = QueueKey {
            distance: F64Wrapper(distance),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.queue.push(item, key);
    }

    /// Removes and returns the nearest item with its distance
    pub fn pop(&mut self) -> Option<(I, Distance)> {
        self.queue.pop().map(|(item, key)| (item, key.distance.0))
    }

    /// Returns the nearest item without removing it
    pub fn peek(&self) -> Option<(&I, Distance)> {
        self.queue.peek().map(|(item, key)| (item, key.distance.0))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<I: Hash + Eq + Clone> NearestQueue<I> {
    /// Lists the queued items nearest-first without draining this queue
    pub fn drain_ordered(&self) -> Vec<I> {
        let mut copy = self.clone();
        std::iter::from_fn(|| copy.pop().map(|(item, _)| item)).collect()
    }
}

impl<I: Hash + Eq> Default for NearestQueue<I> {
    fn default() -> Self {
        Self::new()
    }
}
