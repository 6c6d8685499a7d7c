use crate::error::SearchError;
use crate::graph::{Graph, NodeId, Point};

/// Straight-line distance from a node to the nearest destination.
///
/// Admissible whenever every edge costs at least the Euclidean distance
/// between its endpoints.
#[derive(Debug, Clone)]
pub struct Heuristic<'g> {
    graph: &'g Graph,
    goals: Vec<Point>,
}

impl<'g> Heuristic<'g> {
    /// Fails with [`SearchError::MissingCoordinates`] for the lowest
    /// destination id that has no position.
    pub fn new(graph: &'g Graph) -> Result<Self, SearchError> {
        let goals = graph
            .sorted_destinations()
            .into_iter()
            .map(|goal| {
                graph
                    .coordinates(goal)
                    .ok_or(SearchError::MissingCoordinates(goal))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { graph, goals })
    }

    pub fn estimate(&self, node: NodeId) -> f64 {
        let Some(point) = self.graph.coordinates(node) else {
            tracing::trace!(node = node, "no coordinates, estimating 0");
            return 0.0;
        };

        self.goals
            .iter()
            .map(|goal| point.distance(goal))
            .fold(f64::INFINITY, f64::min)
    }
}
