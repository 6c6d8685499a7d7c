use crate::error::SearchError;
use crate::graph::{Graph, NodeId, path_cost};
use crate::observer::SearchObserver;
use crate::pathfinding::{AStar, BreadthFirst, DepthFirst, Dijkstra, GreedyBestFirst, IdaStar};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of one `search` call.
///
/// `nodes_generated` counts every node pushed onto a frontier or entering a
/// recursive call, the origin included once. It is reported even when no
/// path exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub nodes_generated: usize,
    pub path: Option<Vec<NodeId>>,
    pub goal: Option<NodeId>,
}

impl SearchResult {
    pub fn found(nodes_generated: usize, path: Vec<NodeId>, goal: NodeId) -> Self {
        Self {
            nodes_generated,
            path: Some(path),
            goal: Some(goal),
        }
    }

    pub fn not_found(nodes_generated: usize) -> Self {
        Self {
            nodes_generated,
            path: None,
            goal: None,
        }
    }

    pub fn found_path(&self) -> bool {
        self.path.is_some()
    }

    pub fn path_cost(&self, graph: &Graph) -> Option<u64> {
        self.path.as_deref().and_then(|path| path_cost(graph, path))
    }
}

/// Common contract of the six strategies.
///
/// Implementations hold no state between calls: every invocation starts from
/// a fresh frontier and may be repeated on the same graph.
pub trait SearchAlgorithm {
    fn name(&self) -> &'static str;

    fn search_with(
        &self,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<SearchResult, SearchError>;

    fn search(&self) -> Result<SearchResult, SearchError> {
        self.search_with(None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
    Gbfs,
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "idastar")]
    IdaStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Gbfs,
        Algorithm::AStar,
        Algorithm::IdaStar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Gbfs => "gbfs",
            Algorithm::AStar => "astar",
            Algorithm::IdaStar => "idastar",
        }
    }

    /// Short method code used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "CUS1",
            Algorithm::Gbfs => "GBFS",
            Algorithm::AStar => "AS",
            Algorithm::IdaStar => "CUS2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "breadth-first search",
            Algorithm::Dfs => "depth-first search",
            Algorithm::Dijkstra => "uniform-cost search (Dijkstra)",
            Algorithm::Gbfs => "greedy best-first search",
            Algorithm::AStar => "A* search",
            Algorithm::IdaStar => "iterative-deepening A*",
        }
    }

    pub fn is_informed(&self) -> bool {
        matches!(self, Algorithm::Gbfs | Algorithm::AStar | Algorithm::IdaStar)
    }

    /// Constructs the strategy over `graph`. Heuristic strategies fail here,
    /// before any step runs, when a destination has no coordinates.
    pub fn build<'g>(
        &self,
        graph: &'g Graph,
    ) -> Result<Box<dyn SearchAlgorithm + 'g>, SearchError> {
        Ok(match self {
            Algorithm::Bfs => Box::new(BreadthFirst::new(graph)),
            Algorithm::Dfs => Box::new(DepthFirst::new(graph)),
            Algorithm::Dijkstra => Box::new(Dijkstra::new(graph)),
            Algorithm::Gbfs => Box::new(GreedyBestFirst::new(graph)?),
            Algorithm::AStar => Box::new(AStar::new(graph)?),
            Algorithm::IdaStar => Box::new(IdaStar::new(graph)?),
        })
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" | "cus1" => Ok(Algorithm::Dijkstra),
            "gbfs" => Ok(Algorithm::Gbfs),
            "astar" | "a*" | "as" => Ok(Algorithm::AStar),
            "idastar" | "ida*" | "cus2" => Ok(Algorithm::IdaStar),
            _ => Err(SearchError::UnknownAlgorithm(name.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
