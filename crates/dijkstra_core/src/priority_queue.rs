use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

/// Search frontier implemented as a binary min heap with lazy deletion.
///
/// Entries are never decreased or removed in place. A node whose distance
/// improves is pushed again and the stale entry is skipped by the search once
/// it is popped. The heap therefore holds at most one entry per successful
/// relaxation plus the source, which can be far more than the number of
/// nodes on dense graphs.
///
/// Entries with equal distance are popped in insertion order.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<HeapItem>,
    pushed: u64,
    max_len: usize,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
            max_len: 0,
        }
    }

    pub fn push(&mut self, distance: Weight, node: NodeIndex) {
        self.heap.push(HeapItem {
            distance,
            node,
            seq: self.pushed,
        });
        self.pushed += 1;
        self.max_len = self.max_len.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<HeapItem> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries held at once since creation.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

#[derive(Copy, Clone, Debug)]
pub struct HeapItem {
    pub distance: Weight,
    pub node: NodeIndex,
    seq: u64,
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}

impl Eq for HeapItem {}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse the ordering so that the smallest element is at the top of the heap.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
