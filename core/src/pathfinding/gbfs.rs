use super::queue::PriorityFrontier;
use super::utils::{Score, reconstruct_path};
use crate::algorithm::{SearchAlgorithm, SearchResult};
use crate::error::SearchError;
use crate::graph::Graph;
use crate::heuristics::Heuristic;
use crate::observer::{SearchObserver, StepDetail, StepEvent, StepMetrics, Tracer};
use rustc_hash::{FxHashMap, FxHashSet};

/// Greedy best-first search ordered purely by the heuristic.
///
/// No costs are accumulated and a popped node is never expanded again.
pub struct GreedyBestFirst<'g> {
    graph: &'g Graph,
    heuristic: Heuristic<'g>,
}

impl<'g> GreedyBestFirst<'g> {
    pub fn new(graph: &'g Graph) -> Result<Self, SearchError> {
        Ok(Self {
            graph,
            heuristic: Heuristic::new(graph)?,
        })
    }
}

impl SearchAlgorithm for GreedyBestFirst<'_> {
    fn name(&self) -> &'static str {
        "gbfs"
    }

    fn search_with(
        &self,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<SearchResult, SearchError> {
        let mut tracer = Tracer::new(observer);
        let graph = self.graph;
        let origin = graph.origin();
        tracing::debug!(origin = origin, "starting greedy best-first search");

        let mut queue = PriorityFrontier::new();
        let mut visited = FxHashSet::default();
        let mut parent_map = FxHashMap::default();
        let mut nodes_generated = 1;

        queue.push(Score(self.heuristic.estimate(origin)), origin, None, 0);

        loop {
            tracer.check_cancelled(nodes_generated)?;
            let Some(entry) = queue.pop() else {
                break;
            };
            if !visited.insert(entry.node) {
                continue;
            }
            if let Some(parent) = entry.parent {
                parent_map.insert(entry.node, parent);
            }
            let current = entry.node;

            let is_goal = graph.is_destination(current);
            let path = if is_goal || tracer.is_attached() {
                reconstruct_path(&parent_map, origin, current)
            } else {
                Vec::new()
            };

            tracing::trace!(node = current, h = entry.key.0, "expanding");
            tracer.emit(StepEvent::Expansion(StepDetail {
                node: current,
                neighbor: None,
                path: &path,
                frontier: queue.pending(),
                is_goal,
                metrics: StepMetrics {
                    h: Some(entry.key.0),
                    ..StepMetrics::default()
                },
            }));

            if is_goal {
                tracing::debug!(goal = current, nodes_generated = nodes_generated, "goal reached");
                return Ok(SearchResult::found(nodes_generated, path, current));
            }

            for edge in graph.neighbors(current) {
                if visited.contains(&edge.to) {
                    continue;
                }
                let h = self.heuristic.estimate(edge.to);
                queue.push(Score(h), edge.to, Some(current), 0);
                nodes_generated += 1;

                tracer.emit(StepEvent::Generation(StepDetail {
                    node: current,
                    neighbor: Some(edge.to),
                    path: &path,
                    frontier: queue.pending(),
                    is_goal: graph.is_destination(edge.to),
                    metrics: StepMetrics {
                        h: Some(h),
                        ..StepMetrics::default()
                    },
                }));
            }
        }

        tracing::debug!(nodes_generated = nodes_generated, "frontier exhausted");
        Ok(SearchResult::not_found(nodes_generated))
    }
}
