pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod memory;
pub mod steps;
pub mod utils;

// Re-export commonly used items
pub use app::{CliError, GraphSearchApp, Outcome, RunConfig, RunReport, resolve_method};
pub use args::Args;
pub use memory::MemoryUsage;
pub use utils::format_number;
