use super::utils::reconstruct_path;
use crate::algorithm::{SearchAlgorithm, SearchResult};
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{Graph, NodeId};
use crate::observer::{SearchObserver, StepDetail, StepEvent, StepMetrics, Tracer};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Fewest-hops search. Edge costs are ignored.
///
/// A node counts as visited as soon as it is enqueued, so it is generated at
/// most once.
pub struct BreadthFirst<'g> {
    graph: &'g Graph,
}

impl<'g> BreadthFirst<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }
}

struct BfsState {
    queue: VecDeque<NodeId>,
    visited: FxHashSet<NodeId>,
    parent_map: FxHashMap<NodeId, NodeId>,
    frontier: Frontier,
    nodes_generated: usize,
}

impl BfsState {
    fn new(start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();
        let mut frontier = Frontier::new();

        queue.push_back(start);
        visited.insert(start);
        frontier.insert(start);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
            frontier,
            nodes_generated: 1,
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        let node = self.queue.pop_front()?;
        self.frontier.remove(node);
        Some(node)
    }

    /// Returns `true` if the neighbor was newly enqueued.
    fn visit_neighbor(&mut self, neighbor: NodeId, current: NodeId) -> bool {
        if !self.visited.insert(neighbor) {
            return false;
        }
        self.parent_map.insert(neighbor, current);
        self.queue.push_back(neighbor);
        self.frontier.insert(neighbor);
        self.nodes_generated += 1;
        true
    }
}

impl SearchAlgorithm for BreadthFirst<'_> {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search_with(
        &self,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<SearchResult, SearchError> {
        let mut tracer = Tracer::new(observer);
        let graph = self.graph;
        let origin = graph.origin();
        tracing::debug!(origin = origin, "starting breadth-first search");

        let mut state = BfsState::new(origin);

        if graph.is_destination(origin) {
            state.pop();
            tracer.emit(StepEvent::Expansion(StepDetail {
                node: origin,
                neighbor: None,
                path: &[origin],
                frontier: &state.frontier,
                is_goal: true,
                metrics: StepMetrics::default(),
            }));
            return Ok(SearchResult::found(1, vec![origin], origin));
        }

        loop {
            tracer.check_cancelled(state.nodes_generated)?;
            let Some(current) = state.pop() else {
                break;
            };

            let is_goal = graph.is_destination(current);
            let path = if is_goal || tracer.is_attached() {
                reconstruct_path(&state.parent_map, origin, current)
            } else {
                Vec::new()
            };

            tracing::trace!(node = current, depth = path.len(), "expanding");
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

            for edge in graph.neighbors(current) {
                if state.visit_neighbor(edge.to, current) {
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
        }

        tracing::debug!(nodes_generated = state.nodes_generated, "frontier exhausted");
        Ok(SearchResult::not_found(state.nodes_generated))
    }
}
