use crate::graph::NodeId;
use std::collections::BTreeMap;

/// Node ids currently waiting to be expanded.
///
/// A multiset: queues with lazy deletion and the depth-first stack may hold
/// the same node more than once, and every copy is tracked until it is
/// popped. Iteration is by ascending id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    counts: BTreeMap<NodeId, usize>,
    len: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: NodeId) {
        *self.counts.entry(node).or_insert(0) += 1;
        self.len += 1;
    }

    /// Removes one copy of `node`. Returns `false` if none was pending.
    pub fn remove(&mut self, node: NodeId) -> bool {
        let Some(count) = self.counts.get_mut(&node) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(&node);
        }
        self.len -= 1;
        true
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.counts.contains_key(&node)
    }

    /// Number of pending entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distinct pending node ids, ascending.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.counts.keys().copied()
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_counted() {
        let mut frontier = Frontier::new();
        frontier.insert(4);
        frontier.insert(2);
        frontier.insert(4);

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.to_vec(), vec![2, 4]);

        assert!(frontier.remove(4));
        assert!(frontier.contains(4));
        assert!(frontier.remove(4));
        assert!(!frontier.contains(4));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_remove_missing_node() {
        let mut frontier = Frontier::new();
        assert!(!frontier.remove(1));
        assert!(frontier.is_empty());
    }
}
