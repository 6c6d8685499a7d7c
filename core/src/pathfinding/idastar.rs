use crate::algorithm::{SearchAlgorithm, SearchResult};
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{Edge, Graph, NodeId};
use crate::heuristics::Heuristic;
use crate::observer::{SearchObserver, StepDetail, StepEvent, StepMetrics, Tracer};
use rustc_hash::FxHashSet;

/// Iterative-deepening A*.
///
/// Repeats a depth-first descent under an f-cost ceiling, raising the ceiling
/// to the smallest f that overflowed it until a destination is reached or no
/// finite f remains. Only the current path is remembered, so nodes are
/// regenerated on every iteration and counted each time.
///
/// A destination ends the descent as soon as it is entered, before its f is
/// checked against the ceiling, so the returned path is not guaranteed to be
/// the cheapest when a destination is entered above the ceiling.
pub struct IdaStar<'g> {
    graph: &'g Graph,
    heuristic: Heuristic<'g>,
}

impl<'g> IdaStar<'g> {
    pub fn new(graph: &'g Graph) -> Result<Self, SearchError> {
        Ok(Self {
            graph,
            heuristic: Heuristic::new(graph)?,
        })
    }
}

enum Descent {
    Found(NodeId),
    /// Smallest f that overflowed the bound below this node, or infinity if
    /// the subtree is exhausted.
    Exceeded(f64),
}

/// Owned by one `search_with` call; nothing survives between calls.
struct DescentContext<'s, 'g, 'o> {
    graph: &'g Graph,
    heuristic: &'s Heuristic<'g>,
    tracer: Tracer<'o>,
    path: Vec<NodeId>,
    on_path: FxHashSet<NodeId>,
    frontier: Frontier,
    nodes_generated: usize,
}

impl DescentContext<'_, '_, '_> {
    fn reset(&mut self, origin: NodeId) {
        self.path.clear();
        self.path.push(origin);
        self.on_path.clear();
        self.on_path.insert(origin);
        self.frontier = Frontier::new();
    }

    fn descend(&mut self, node: NodeId, g: u64, bound: f64) -> Result<Descent, SearchError> {
        self.tracer.check_cancelled(self.nodes_generated)?;

        let h = self.heuristic.estimate(node);
        let f = g as f64 + h;
        let metrics = StepMetrics {
            g: Some(g),
            h: Some(h),
            bound: Some(bound),
            pruned: false,
        };

        // Destinations win before the bound is consulted.
        if self.graph.is_destination(node) {
            self.emit_expansion(node, true, metrics);
            return Ok(Descent::Found(node));
        }
        if f > bound {
            return Ok(Descent::Exceeded(f));
        }

        self.emit_expansion(node, false, metrics);
        tracing::trace!(node = node, g = g, f = f, bound = bound, "expanding");

        let graph = self.graph;
        let children: Vec<Edge> = graph
            .neighbors(node)
            .iter()
            .filter(|edge| !self.on_path.contains(&edge.to))
            .copied()
            .collect();
        for edge in &children {
            self.frontier.insert(edge.to);
        }

        let mut min_excess = f64::INFINITY;
        for edge in children {
            self.frontier.remove(edge.to);
            let child_g = g + u64::from(edge.cost);
            self.nodes_generated += 1;

            if self.tracer.is_attached() {
                let child_h = self.heuristic.estimate(edge.to);
                let is_goal = graph.is_destination(edge.to);
                self.tracer.emit(StepEvent::Generation(StepDetail {
                    node,
                    neighbor: Some(edge.to),
                    path: &self.path,
                    frontier: &self.frontier,
                    is_goal,
                    metrics: StepMetrics {
                        g: Some(child_g),
                        h: Some(child_h),
                        bound: Some(bound),
                        pruned: !is_goal && child_g as f64 + child_h > bound,
                    },
                }));
            }

            self.path.push(edge.to);
            self.on_path.insert(edge.to);

            match self.descend(edge.to, child_g, bound)? {
                Descent::Found(goal) => return Ok(Descent::Found(goal)),
                Descent::Exceeded(excess) => min_excess = min_excess.min(excess),
            }

            self.path.pop();
            self.on_path.remove(&edge.to);
        }

        Ok(Descent::Exceeded(min_excess))
    }

    fn emit_expansion(&mut self, node: NodeId, is_goal: bool, metrics: StepMetrics) {
        self.tracer.emit(StepEvent::Expansion(StepDetail {
            node,
            neighbor: None,
            path: &self.path,
            frontier: &self.frontier,
            is_goal,
            metrics,
        }));
    }
}

impl SearchAlgorithm for IdaStar<'_> {
    fn name(&self) -> &'static str {
        "idastar"
    }

    fn search_with(
        &self,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<SearchResult, SearchError> {
        let origin = self.graph.origin();
        tracing::debug!(origin = origin, "starting iterative-deepening A* search");

        let mut context = DescentContext {
            graph: self.graph,
            heuristic: &self.heuristic,
            tracer: Tracer::new(observer),
            path: vec![origin],
            on_path: FxHashSet::default(),
            frontier: Frontier::new(),
            nodes_generated: 1,
        };

        if self.graph.is_destination(origin) {
            context.emit_expansion(
                origin,
                true,
                StepMetrics {
                    g: Some(0),
                    h: Some(0.0),
                    ..StepMetrics::default()
                },
            );
            return Ok(SearchResult::found(1, vec![origin], origin));
        }

        let mut bound = self.heuristic.estimate(origin);
        let mut iteration = 0;

        loop {
            iteration += 1;
            context.reset(origin);
            context.tracer.emit(StepEvent::Reset { iteration, bound });
            tracing::trace!(iteration = iteration, bound = bound, "starting bounded descent");

            match context.descend(origin, 0, bound)? {
                Descent::Found(goal) => {
                    tracing::debug!(
                        goal = goal,
                        iterations = iteration,
                        nodes_generated = context.nodes_generated,
                        "goal reached"
                    );
                    return Ok(SearchResult::found(
                        context.nodes_generated,
                        std::mem::take(&mut context.path),
                        goal,
                    ));
                }
                Descent::Exceeded(next) if next.is_infinite() => {
                    tracing::debug!(
                        iterations = iteration,
                        nodes_generated = context.nodes_generated,
                        "search space exhausted"
                    );
                    return Ok(SearchResult::not_found(context.nodes_generated));
                }
                Descent::Exceeded(next) => {
                    context.tracer.emit(StepEvent::BoundRaised {
                        previous: bound,
                        bound: next,
                    });
                    tracing::trace!(previous = bound, bound = next, "raising bound");
                    bound = next;
                }
            }
        }
    }
}
