use super::queue::PriorityFrontier;
use super::utils::{Score, reconstruct_path};
use crate::algorithm::{SearchAlgorithm, SearchResult};
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::heuristics::Heuristic;
use crate::observer::{SearchObserver, StepDetail, StepEvent, StepMetrics, Tracer};
use rustc_hash::{FxHashMap, FxHashSet};

/// A* search.
///
/// The frontier is ordered by `(f, h, insertion)`: f-ties go to the node that
/// looks closer to a goal, then to the earlier push. The first destination
/// popped is returned.
pub struct AStar<'g> {
    graph: &'g Graph,
    heuristic: Heuristic<'g>,
}

impl<'g> AStar<'g> {
    pub fn new(graph: &'g Graph) -> Result<Self, SearchError> {
        Ok(Self {
            graph,
            heuristic: Heuristic::new(graph)?,
        })
    }
}

type AStarKey = (Score, Score);

struct AStarState {
    queue: PriorityFrontier<AStarKey>,
    g_cost: FxHashMap<NodeId, u64>,
    parent_map: FxHashMap<NodeId, NodeId>,
    closed: FxHashSet<NodeId>,
    nodes_generated: usize,
}

impl AStarState {
    fn new(start: NodeId, start_h: f64) -> Self {
        let mut queue = PriorityFrontier::new();
        let mut g_cost = FxHashMap::default();

        queue.push((Score(start_h), Score(start_h)), start, None, 0);
        g_cost.insert(start, 0);

        Self {
            queue,
            g_cost,
            parent_map: FxHashMap::default(),
            closed: FxHashSet::default(),
            nodes_generated: 1,
        }
    }

    fn improves(&self, node: NodeId, tentative_g: u64) -> bool {
        self.g_cost
            .get(&node)
            .is_none_or(|&best| tentative_g < best)
    }
}

impl SearchAlgorithm for AStar<'_> {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search_with(
        &self,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<SearchResult, SearchError> {
        let mut tracer = Tracer::new(observer);
        let graph = self.graph;
        let origin = graph.origin();
        tracing::debug!(origin = origin, "starting A* search");

        let mut state = AStarState::new(origin, self.heuristic.estimate(origin));

        loop {
            tracer.check_cancelled(state.nodes_generated)?;
            let Some(entry) = state.queue.pop() else {
                break;
            };
            if !state.closed.insert(entry.node) {
                continue;
            }
            if let Some(parent) = entry.parent {
                state.parent_map.insert(entry.node, parent);
            }
            let current = entry.node;
            let g = entry.g;
            let (_, Score(h)) = entry.key;

            let is_goal = graph.is_destination(current);
            let path = if is_goal || tracer.is_attached() {
                reconstruct_path(&state.parent_map, origin, current)
            } else {
                Vec::new()
            };

            tracing::trace!(node = current, g = g, h = h, "expanding");
            tracer.emit(StepEvent::Expansion(StepDetail {
                node: current,
                neighbor: None,
                path: &path,
                frontier: state.queue.pending(),
                is_goal,
                metrics: StepMetrics {
                    g: Some(g),
                    h: Some(h),
                    ..StepMetrics::default()
                },
            }));

            if is_goal {
                tracing::debug!(
                    goal = current,
                    cost = g,
                    nodes_generated = state.nodes_generated,
                    "goal reached"
                );
                return Ok(SearchResult::found(state.nodes_generated, path, current));
            }

            for edge in graph.neighbors(current) {
                let tentative_g = g + u64::from(edge.cost);
                if !state.improves(edge.to, tentative_g) {
                    continue;
                }
                state.g_cost.insert(edge.to, tentative_g);

                let neighbor_h = self.heuristic.estimate(edge.to);
                let f = tentative_g as f64 + neighbor_h;
                state
                    .queue
                    .push((Score(f), Score(neighbor_h)), edge.to, Some(current), tentative_g);
                state.nodes_generated += 1;

                tracer.emit(StepEvent::Generation(StepDetail {
                    node: current,
                    neighbor: Some(edge.to),
                    path: &path,
                    frontier: state.queue.pending(),
                    is_goal: graph.is_destination(edge.to),
                    metrics: StepMetrics {
                        g: Some(tentative_g),
                        h: Some(neighbor_h),
                        ..StepMetrics::default()
                    },
                }));
            }
        }

        tracing::debug!(nodes_generated = state.nodes_generated, "frontier exhausted");
        Ok(SearchResult::not_found(state.nodes_generated))
    }
}
