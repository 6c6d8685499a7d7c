use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "graphsearch")]
#[command(about = "Find a path from the origin to a destination of a graph file")]
pub struct Args {
    /// Graph description file
    pub file: PathBuf,

    /// Search method: bfs, dfs, dijkstra (cus1), gbfs, astar (as), idastar (cus2)
    pub method: Option<String>,

    /// Run every method and print a comparison table
    #[arg(short, long)]
    pub all: bool,

    /// Print machine-readable JSON instead of the text report
    #[arg(short, long)]
    pub json: bool,

    /// Print every expansion and generation as the search runs
    #[arg(short, long)]
    pub steps: bool,

    /// Pause after every step event
    #[arg(long, value_name = "MILLISECONDS", default_value = "0")]
    pub delay_ms: u64,

    /// Stop the search after this many expansions
    #[arg(long, value_name = "COUNT")]
    pub max_steps: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - debug logging and graph summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path
    #[arg(short, long)]
    pub quiet: bool,
}
