use crate::graph::NodeId;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Walks parent links back from `target` to `start`.
///
/// Every node on the way must have a recorded parent; the algorithms only
/// call this for nodes they reached from `start`.
pub fn reconstruct_path(
    parent_map: &FxHashMap<NodeId, NodeId>,
    start: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        path.push(current_node);
        current_node = parent_map[&current_node];
    }

    path.push(start);
    path.reverse();
    path
}

/// Totally ordered `f64` for priority keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Score(pub f64);

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
