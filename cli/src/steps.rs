use crate::colors::ColorScheme;
use crate::utils::{format_node_set, format_path};
use graphsearch_core::{NodeId, StepDetail, StepEvent, StepMetrics};

/// Renders the step event stream as one line per event.
pub struct StepPrinter<'c> {
    colors: &'c ColorScheme,
    to_stderr: bool,
    counter: usize,
}

impl<'c> StepPrinter<'c> {
    /// With `to_stderr`, lines go to stderr so a JSON document on stdout stays
    /// parseable.
    pub fn new(colors: &'c ColorScheme, to_stderr: bool) -> Self {
        Self {
            colors,
            to_stderr,
            counter: 0,
        }
    }

    pub fn print(&mut self, event: &StepEvent<'_>) {
        self.counter += 1;
        let line = format_step(self.counter, event, self.colors);
        if self.to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

pub fn format_step(counter: usize, event: &StepEvent<'_>, colors: &ColorScheme) -> String {
    let number = colors.step_number(&format!("[{:>4}]", counter));

    match event {
        StepEvent::Expansion(detail) => {
            let node = format_node(detail.node, detail.is_goal, colors);
            format!(
                "{} expand   {}{} path {} frontier {}",
                number,
                node,
                format_metrics(&detail.metrics),
                format_path(detail.path, "-"),
                format_node_set(detail.frontier.iter())
            )
        }
        StepEvent::Generation(detail) => format_generation(number.to_string(), detail, colors),
        StepEvent::BoundRaised { previous, bound } => format!(
            "{} bound    {} -> {}",
            number,
            colors.number(&format!("{:.3}", previous)),
            colors.number(&format!("{:.3}", bound))
        ),
        StepEvent::Reset { iteration, bound } => format!(
            "{} restart  iteration {} with bound {}",
            number,
            colors.number(&iteration.to_string()),
            colors.number(&format!("{:.3}", bound))
        ),
    }
}

fn format_generation(number: String, detail: &StepDetail<'_>, colors: &ColorScheme) -> String {
    let neighbor = detail
        .neighbor
        .map(|neighbor| format_node(neighbor, detail.is_goal, colors).to_string())
        .unwrap_or_default();
    let mut line = format!(
        "{} generate {} -> {}{}",
        number,
        colors.node(&detail.node.to_string()),
        neighbor,
        format_metrics(&detail.metrics)
    );

    if detail.metrics.pruned {
        line.push_str(&format!(" {}", colors.pruned("(over bound)")));
    }
    line.push_str(&format!(" frontier {}", format_node_set(detail.frontier.iter())));
    line
}

fn format_node(node: NodeId, is_goal: bool, colors: &ColorScheme) -> colored::ColoredString {
    if is_goal {
        colors.goal(&format!("{}*", node))
    } else {
        colors.node(&node.to_string())
    }
}

fn format_metrics(metrics: &StepMetrics) -> String {
    let mut text = String::new();
    if let Some(g) = metrics.g {
        text.push_str(&format!(" g={}", g));
    }
    if let Some(h) = metrics.h {
        text.push_str(&format!(" h={:.3}", h));
    }
    if let Some(bound) = metrics.bound {
        text.push_str(&format!(" bound={:.3}", bound));
    }
    text
}
