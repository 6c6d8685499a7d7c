use crate::frontier::Frontier;
use crate::graph::NodeId;
use std::{cmp::Ordering, collections::BinaryHeap};

/// One pending expansion in a best-first frontier.
#[derive(Debug, Clone)]
pub(crate) struct QueueEntry<K> {
    pub key: K,
    pub sequence: u64,
    pub node: NodeId,
    pub parent: Option<NodeId>,
    pub g: u64,
}

impl<K: Ord> PartialEq for QueueEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.sequence == other.sequence
    }
}

impl<K: Ord> Eq for QueueEntry<K> {}

impl<K: Ord> PartialOrd for QueueEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for QueueEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; among equal keys the earlier push wins.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue with insertion-order tie breaking.
///
/// Superseded entries are left in place (lazy deletion); callers skip them
/// when they surface. The pending multiset mirrors the heap for observers.
pub(crate) struct PriorityFrontier<K> {
    heap: BinaryHeap<QueueEntry<K>>,
    next_sequence: u64,
    pending: Frontier,
}

impl<K: Ord> PriorityFrontier<K> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            pending: Frontier::new(),
        }
    }

    pub fn push(&mut self, key: K, node: NodeId, parent: Option<NodeId>, g: u64) {
        self.heap.push(QueueEntry {
            key,
            sequence: self.next_sequence,
            node,
            parent,
            g,
        });
        self.next_sequence += 1;
        self.pending.insert(node);
    }

    pub fn pop(&mut self) -> Option<QueueEntry<K>> {
        let entry = self.heap.pop()?;
        self.pending.remove(entry.node);
        Some(entry)
    }

    pub fn pending(&self) -> &Frontier {
        &self.pending
    }
}
