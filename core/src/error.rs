use crate::graph::NodeId;
use std::fmt;

/// Failures that stop a search from starting or finishing.
///
/// Not finding a path is not an error: it is reported through
/// [`SearchResult`](crate::SearchResult) with an absent path.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The embedder asked for an algorithm name that is not registered.
    UnknownAlgorithm(String),
    /// A destination has no coordinates, so the heuristic cannot be evaluated.
    MissingCoordinates(NodeId),
    /// The observer requested early termination.
    Cancelled { nodes_generated: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm(name) => write!(f, "Unknown method: {}", name),
            Self::MissingCoordinates(node) => {
                write!(f, "Destination {} has no coordinates", node)
            }
            Self::Cancelled { nodes_generated } => write!(
                f,
                "Search cancelled by observer after generating {} nodes",
                nodes_generated
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Structural problems found while assembling a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    MissingOrigin,
    NoDestinations,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOrigin => write!(f, "graph has no origin node"),
            Self::NoDestinations => write!(f, "graph has no destination nodes"),
        }
    }
}

impl std::error::Error for GraphError {}
