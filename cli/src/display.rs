use graphsearch_core::Algorithm;

use crate::app::{CliError, GraphSearchApp, Outcome, RunReport};
use crate::colors::ColorScheme;
use crate::utils::{format_kilobytes, format_node_set, format_number, format_path};

pub fn display_graph_summary(app: &GraphSearchApp, colors: &ColorScheme) {
    let graph = &app.graph;
    println!(
        "📂 Loaded {} with {} nodes and {} edges",
        app.graph_path.display(),
        colors.number(&format_number(graph.node_count())),
        colors.number(&format_number(graph.edge_count()))
    );
    println!(
        "🚩 Origin {} ➜ destinations {}",
        colors.node(&graph.origin().to_string()),
        colors.node(&format_node_set(graph.sorted_destinations()))
    );
}

pub fn display_report(app: &GraphSearchApp, report: &RunReport, quiet: bool, colors: &ColorScheme) {
    if quiet {
        println!("{}", format_path_line(report, colors));
        return;
    }

    println!("{} {}", colors.label("Filename:"), app.graph_path.display());
    println!(
        "{} {} ({})",
        colors.label("Method:"),
        colors.method(report.algorithm.label()),
        report.algorithm.description()
    );

    match &report.outcome {
        Outcome::Completed(result) => {
            let goal = result
                .goal
                .map(|goal| colors.goal(&goal.to_string()).to_string())
                .unwrap_or_else(|| colors.error("None").to_string());
            println!("{} {}", colors.label("Goal:"), goal);
        }
        Outcome::Stopped { expansions, .. } => {
            println!(
                "{} {}",
                colors.label("Goal:"),
                colors.error(&format!("stopped after {} expansions", expansions))
            );
        }
    }

    println!(
        "{} {}",
        colors.label("Number of Nodes:"),
        colors.number(&format_number(report.outcome.nodes_generated()))
    );
    println!("{} {}", colors.label("Path:"), format_path_line(report, colors));
    if let Some(cost) = report.path_cost {
        println!("{} {}", colors.label("Path cost:"), colors.number(&cost.to_string()));
    }

    println!();
    println!(
        "{} Memory usage: {} KB retained, {} KB peak",
        colors.stats("📊"),
        colors.number(&format_kilobytes(report.memory.retained_bytes)),
        colors.number(&format_kilobytes(report.memory.peak_bytes))
    );
    println!(
        "{} Execution time: {} ms",
        colors.stats("⏱️"),
        colors.number(&format!("{:.3}", report.elapsed_ms()))
    );
}

fn format_path_line(report: &RunReport, colors: &ColorScheme) -> String {
    match report.outcome.result().and_then(|result| result.path.as_deref()) {
        Some(path) => path
            .iter()
            .map(|node| colors.node(&node.to_string()).to_string())
            .collect::<Vec<_>>()
            .join(" → "),
        None => colors.error("Not found").to_string(),
    }
}

/// One row per method, aligned for a terminal.
pub fn display_comparison(
    app: &GraphSearchApp,
    runs: &[(Algorithm, Result<RunReport, CliError>)],
    colors: &ColorScheme,
) {
    println!("{} {}\n", colors.label("Filename:"), app.graph_path.display());
    println!(
        "{:<6} {:>6} {:>10} {:>8} {:>12} {:>12}  {}",
        "Method", "Goal", "Nodes", "Cost", "Time (ms)", "Peak (KB)", "Path"
    );

    for (algorithm, run) in runs {
        let row = match run {
            Ok(report) => format_comparison_row(report),
            Err(error) => format!("{:<6} {}", algorithm.label(), colors.error(&error.to_string())),
        };
        println!("{}", row);
    }
}

pub fn format_comparison_row(report: &RunReport) -> String {
    let result = report.outcome.result();
    let goal = result
        .and_then(|result| result.goal)
        .map_or_else(|| "-".to_string(), |goal| goal.to_string());
    let cost = report
        .path_cost
        .map_or_else(|| "-".to_string(), |cost| cost.to_string());
    let path = match (&report.outcome, result.and_then(|result| result.path.as_deref())) {
        (Outcome::Stopped { .. }, _) => "stopped".to_string(),
        (_, Some(path)) => format_path(path, " → "),
        (_, None) => "Not found".to_string(),
    };

    format!(
        "{:<6} {:>6} {:>10} {:>8} {:>12.3} {:>12}  {}",
        report.algorithm.label(),
        goal,
        format_number(report.outcome.nodes_generated()),
        cost,
        report.elapsed_ms(),
        format_kilobytes(report.memory.peak_bytes),
        path
    )
}
