use super::utils::reconstruct_path;
use crate::algorithm::{SearchAlgorithm, SearchResult};
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{Graph, NodeId};
use crate::observer::{SearchObserver, StepDetail, StepEvent, StepMetrics, Tracer};
use rustc_hash::{FxHashMap, FxHashSet};

/// Depth-first search over a LIFO stack.
///
/// Nodes are closed when popped, not when pushed, so the same node can sit on
/// the stack several times; the first copy popped decides its parent and the
/// rest are discarded. Neighbors are pushed highest id first so the lowest id
/// is expanded first.
pub struct DepthFirst<'g> {
    graph: &'g Graph,
}

impl<'g> DepthFirst<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }
}

struct StackEntry {
    node: NodeId,
    parent: Option<NodeId>,
}

struct DfsState {
    stack: Vec<StackEntry>,
    closed: FxHashSet<NodeId>,
    parent_map: FxHashMap<NodeId, NodeId>,
    frontier: Frontier,
    nodes_generated: usize,
}

impl DfsState {
    fn new(start: NodeId) -> Self {
        let mut frontier = Frontier::new();
        frontier.insert(start);

        Self {
            stack: vec![StackEntry {
                node: start,
                parent: None,
            }],
            closed: FxHashSet::default(),
            parent_map: FxHashMap::default(),
            frontier,
            nodes_generated: 1,
        }
    }

    fn pop(&mut self) -> Option<StackEntry> {
        let entry = self.stack.pop()?;
        self.frontier.remove(entry.node);
        Some(entry)
    }

    /// Marks the node closed. Returns `false` for a stale duplicate.
    fn close(&mut self, entry: &StackEntry) -> bool {
        if !self.closed.insert(entry.node) {
            return false;
        }
        if let Some(parent) = entry.parent {
            self.parent_map.insert(entry.node, parent);
        }
        true
    }

    fn push(&mut self, node: NodeId, parent: NodeId) {
        self.stack.push(StackEntry {
            node,
            parent: Some(parent),
        });
        self.frontier.insert(node);
        self.nodes_generated += 1;
    }
}

impl SearchAlgorithm for DepthFirst<'_> {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn search_with(
        &self,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<SearchResult, SearchError> {
        let mut tracer = Tracer::new(observer);
        let graph = self.graph;
        let origin = graph.origin();
        tracing::debug!(origin = origin, "starting depth-first search");

        let mut state = DfsState::new(origin);

        loop {
            tracer.check_cancelled(state.nodes_generated)?;
            let Some(entry) = state.pop() else {
                break;
            };
            if !state.close(&entry) {
                continue;
            }
            let current = entry.node;

            let is_goal = graph.is_destination(current);
            let path = if is_goal || tracer.is_attached() {
                reconstruct_path(&state.parent_map, origin, current)
            } else {
                Vec::new()
            };

            tracing::trace!(node = current, stack = state.stack.len(), "expanding");
            tracer.emit(StepEvent::Expansion(StepDetail {
                node: current,
                neighbor: None,
                path: &path,
                frontier: &state.frontier,
                is_goal,
                metrics: StepMetrics::default(),
            }));

            if is_goal {
                tracing::debug!(
                    goal = current,
                    nodes_generated = state.nodes_generated,
                    "goal reached"
                );
                return Ok(SearchResult::found(state.nodes_generated, path, current));
            }

            for edge in graph.neighbors(current).iter().rev() {
                if state.closed.contains(&edge.to) {
                    continue;
                }
                state.push(edge.to, current);
                tracer.emit(StepEvent::Generation(StepDetail {
                    node: current,
                    neighbor: Some(edge.to),
                    path: &path,
                    frontier: &state.frontier,
                    is_goal: graph.is_destination(edge.to),
                    metrics: StepMetrics::default(),
                }));
            }
        }

        tracing::debug!(nodes_generated = state.nodes_generated, "stack exhausted");
        Ok(SearchResult::not_found(state.nodes_generated))
    }
}
