pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod gbfs;
pub mod idastar;
mod queue;
pub mod utils;

// Re-export the strategies
pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use gbfs::GreedyBestFirst;
pub use idastar::IdaStar;
pub use utils::reconstruct_path;
