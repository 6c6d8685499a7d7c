use super::queue::{PriorityFrontier, QueueEntry};
use super::utils::reconstruct_path;
use crate::algorithm::{SearchAlgorithm, SearchResult};
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::observer::{SearchObserver, StepDetail, StepEvent, StepMetrics, Tracer};
use rustc_hash::{FxHashMap, FxHashSet};

/// Uniform-cost search keyed by accumulated path cost.
///
/// Decrease-key is lazy: an improved cost pushes a fresh entry and the old
/// one is skipped when it surfaces after the node was closed.
pub struct Dijkstra<'g> {
    graph: &'g Graph,
}

impl<'g> Dijkstra<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }
}

struct DijkstraState {
    queue: PriorityFrontier<u64>,
    distances: FxHashMap<NodeId, u64>,
    parent_map: FxHashMap<NodeId, NodeId>,
    closed: FxHashSet<NodeId>,
    nodes_generated: usize,
}

impl DijkstraState {
    fn new(start: NodeId) -> Self {
        let mut queue = PriorityFrontier::new();
        let mut distances = FxHashMap::default();

        queue.push(0, start, None, 0);
        distances.insert(start, 0);

        Self {
            queue,
            distances,
            parent_map: FxHashMap::default(),
            closed: FxHashSet::default(),
            nodes_generated: 1,
        }
    }

    fn close(&mut self, entry: &QueueEntry<u64>) -> bool {
        if !self.closed.insert(entry.node) {
            return false;
        }
        if let Some(parent) = entry.parent {
            self.parent_map.insert(entry.node, parent);
        }
        true
    }

    /// Pushes the neighbor only when `new_cost` strictly beats its best known
    /// cost. Returns `true` if it was pushed.
    fn visit_neighbor(&mut self, neighbor: NodeId, current: NodeId, new_cost: u64) -> bool {
        if let Some(&existing_cost) = self.distances.get(&neighbor) {
            if new_cost >= existing_cost {
                return false;
            }
        }

        self.distances.insert(neighbor, new_cost);
        self.queue.push(new_cost, neighbor, Some(current), new_cost);
        self.nodes_generated += 1;
        true
    }
}

impl SearchAlgorithm for Dijkstra<'_> {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn search_with(
        &self,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<SearchResult, SearchError> {
        let mut tracer = Tracer::new(observer);
        let graph = self.graph;
        let origin = graph.origin();
        tracing::debug!(origin = origin, "starting uniform-cost search");

        let mut state = DijkstraState::new(origin);

        loop {
            tracer.check_cancelled(state.nodes_generated)?;
            let Some(entry) = state.queue.pop() else {
                break;
            };
            if !state.close(&entry) {
                continue;
            }
            let current = entry.node;
            let cost = entry.g;

            let is_goal = graph.is_destination(current);
            let path = if is_goal || tracer.is_attached() {
                reconstruct_path(&state.parent_map, origin, current)
            } else {
                Vec::new()
            };

            tracing::trace!(node = current, g = cost, "expanding");
            tracer.emit(StepEvent::Expansion(StepDetail {
                node: current,
                neighbor: None,
                path: &path,
                frontier: state.queue.pending(),
                is_goal,
                metrics: StepMetrics {
                    g: Some(cost),
                    ..StepMetrics::default()
                },
            }));

            if is_goal {
                tracing::debug!(
                    goal = current,
                    cost = cost,
                    nodes_generated = state.nodes_generated,
                    "goal reached"
                );
                return Ok(SearchResult::found(state.nodes_generated, path, current));
            }

            for edge in graph.neighbors(current) {
                let new_cost = cost + u64::from(edge.cost);
                if state.visit_neighbor(edge.to, current, new_cost) {
                    tracer.emit(StepEvent::Generation(StepDetail {
                        node: current,
                        neighbor: Some(edge.to),
                        path: &path,
                        frontier: state.queue.pending(),
                        is_goal: graph.is_destination(edge.to),
                        metrics: StepMetrics {
                            g: Some(new_cost),
                            ..StepMetrics::default()
                        },
                    }));
                }
            }
        }

        tracing::debug!(nodes_generated = state.nodes_generated, "frontier exhausted");
        Ok(SearchResult::not_found(state.nodes_generated))
    }
}
