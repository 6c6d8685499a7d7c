//! Six interchangeable strategies for finding a path from one origin to any
//! of several destinations in a weighted digraph, with a step-by-step event
//! stream for observers.

pub mod algorithm;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristics;
pub mod observer;
pub mod parsing;
pub mod pathfinding;

// Re-export commonly used items
pub use algorithm::{Algorithm, SearchAlgorithm, SearchResult};
pub use error::{GraphError, SearchError};
pub use frontier::Frontier;
pub use graph::{Cost, Edge, Graph, GraphBuilder, NodeId, Point, path_cost};
pub use heuristics::Heuristic;
pub use observer::{
    EventLog, RecordedDetail, RecordedStep, SearchObserver, StepDetail, StepEvent, StepMetrics,
};
pub use parsing::{ParseError, load_graph, parse_graph};
pub use pathfinding::{AStar, BreadthFirst, DepthFirst, Dijkstra, GreedyBestFirst, IdaStar};
