use graphsearch_core::{Algorithm, NodeId};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::app::{Outcome, RunReport};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub file: String,
    pub method: Algorithm,
    pub label: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub stopped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub nodes_generated: usize,
    pub search_time_ms: f64,
    pub memory_kb: f64,
    pub peak_memory_kb: f64,
}

fn create_query(graph_path: &Path, algorithm: Algorithm) -> JsonQuery {
    JsonQuery {
        file: graph_path.display().to_string(),
        method: algorithm,
        label: algorithm.label().to_string(),
    }
}

pub fn create_json_output(graph_path: &Path, report: &RunReport) -> JsonOutput {
    let result = report.outcome.result();

    JsonOutput {
        query: create_query(graph_path, report.algorithm),
        result: JsonResult {
            found: result.is_some_and(|result| result.found_path()),
            stopped: matches!(report.outcome, Outcome::Stopped { .. }),
            goal: result.and_then(|result| result.goal),
            path: result.and_then(|result| result.path.clone()),
            cost: report.path_cost,
            error: None,
        },
        stats: Some(JsonStats {
            nodes_generated: report.outcome.nodes_generated(),
            search_time_ms: report.elapsed_ms(),
            memory_kb: report.memory.retained_bytes as f64 / 1024.0,
            peak_memory_kb: report.memory.peak_bytes as f64 / 1024.0,
        }),
    }
}

/// Entry for a method that could not run at all.
pub fn create_json_error(graph_path: &Path, algorithm: Algorithm, message: String) -> JsonOutput {
    JsonOutput {
        query: create_query(graph_path, algorithm),
        result: JsonResult {
            found: false,
            stopped: false,
            goal: None,
            path: None,
            cost: None,
            error: Some(message),
        },
        stats: None,
    }
}

pub fn print_json_output<T: Serialize + ?Sized>(json_output: &T) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
