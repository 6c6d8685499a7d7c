//! Loader for the textual graph description format:
//!
//! ```text
//! Nodes:
//! 1: (4,1)
//! 2: (2,2)
//! Edges:
//! (2,1): 4
//! Origin:
//! 2
//! Destinations:
//! 1; 3
//! ```

use crate::error::GraphError;
use crate::graph::{Cost, Graph, GraphBuilder, NodeId, Point};
use std::{
    fmt,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum ParseError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Syntax {
        line: usize,
        message: String,
    },
    Structure(GraphError),
}

impl ParseError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            Self::Syntax { line, message } => write!(f, "line {}: {}", line, message),
            Self::Structure(error) => write!(f, "invalid graph: {}", error),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Structure(error) => Some(error),
            Self::Syntax { .. } => None,
        }
    }
}

impl From<GraphError> for ParseError {
    fn from(error: GraphError) -> Self {
        Self::Structure(error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Nodes,
    Edges,
    Origin,
    Destinations,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        match line {
            "Nodes:" => Some(Section::Nodes),
            "Edges:" => Some(Section::Edges),
            "Origin:" => Some(Section::Origin),
            "Destinations:" => Some(Section::Destinations),
            _ => None,
        }
    }
}

pub fn load_graph(graph_path: &Path) -> Result<Graph, ParseError> {
    let contents = std::fs::read_to_string(graph_path).map_err(|source| ParseError::Io {
        path: graph_path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(&contents)?;

    tracing::debug!(
        path = %graph_path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

pub fn parse_graph(contents: &str) -> Result<Graph, ParseError> {
    let mut builder = GraphBuilder::new();
    let mut current_section = None;

    for (index, raw_line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(section) = Section::from_header(line) {
            current_section = Some(section);
            continue;
        }

        match current_section {
            None => {
                return Err(ParseError::syntax(
                    line_number,
                    format!("'{}' appears before any section header", line),
                ));
            }
            Some(Section::Nodes) => {
                let (id, point) = parse_node_line(line, line_number)?;
                builder.add_node(id, point);
            }
            Some(Section::Edges) => {
                let (from, to, cost) = parse_edge_line(line, line_number)?;
                builder.add_edge(from, to, cost);
            }
            Some(Section::Origin) => {
                if builder.has_origin() {
                    return Err(ParseError::syntax(line_number, "origin given more than once"));
                }
                builder.origin(parse_node_id(line, line_number)?);
            }
            Some(Section::Destinations) => {
                for destination in parse_destination_line(line, line_number)? {
                    builder.destination(destination);
                }
            }
        }
    }

    Ok(builder.build()?)
}

/// `1: (4,1)`
fn parse_node_line(line: &str, line_number: usize) -> Result<(NodeId, Point), ParseError> {
    let (id_part, coordinate_part) = line
        .split_once(':')
        .ok_or_else(|| ParseError::syntax(line_number, format!("malformed node '{}'", line)))?;

    let id = parse_node_id(id_part, line_number)?;
    let (x, y) = parse_pair(coordinate_part, line_number)?;
    let x = parse_coordinate(x, line_number)?;
    let y = parse_coordinate(y, line_number)?;

    Ok((id, Point::new(x, y)))
}

/// `(2,1): 4`
fn parse_edge_line(line: &str, line_number: usize) -> Result<(NodeId, NodeId, Cost), ParseError> {
    let (edge_part, cost_part) = line
        .split_once(':')
        .ok_or_else(|| ParseError::syntax(line_number, format!("malformed edge '{}'", line)))?;

    let (from, to) = parse_pair(edge_part, line_number)?;
    let from = parse_node_id(from, line_number)?;
    let to = parse_node_id(to, line_number)?;
    let cost = parse_cost(cost_part, line_number)?;

    Ok((from, to, cost))
}

/// `5; 4` (a trailing separator is allowed)
fn parse_destination_line(line: &str, line_number: usize) -> Result<Vec<NodeId>, ParseError> {
    line.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_node_id(part, line_number))
        .collect()
}

/// Splits `(a,b)` into its two trimmed components.
fn parse_pair(text: &str, line_number: usize) -> Result<(&str, &str), ParseError> {
    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            ParseError::syntax(line_number, format!("expected '(a,b)', found '{}'", text.trim()))
        })?;

    let (first, second) = inner.split_once(',').ok_or_else(|| {
        ParseError::syntax(line_number, format!("expected two values in '{}'", text.trim()))
    })?;

    Ok((first.trim(), second.trim()))
}

fn parse_node_id(text: &str, line_number: usize) -> Result<NodeId, ParseError> {
    let text = text.trim();
    text.parse::<NodeId>()
        .map_err(|_| ParseError::syntax(line_number, format!("invalid node id '{}'", text)))
}

fn parse_coordinate(text: &str, line_number: usize) -> Result<i32, ParseError> {
    text.parse::<i32>()
        .map_err(|_| ParseError::syntax(line_number, format!("invalid coordinate '{}'", text)))
}

fn parse_cost(text: &str, line_number: usize) -> Result<Cost, ParseError> {
    let text = text.trim();
    let cost = text
        .parse::<i64>()
        .map_err(|_| ParseError::syntax(line_number, format!("invalid edge cost '{}'", text)))?;

    if cost < 0 {
        return Err(ParseError::syntax(
            line_number,
            format!("negative edge cost {}", cost),
        ));
    }

    Cost::try_from(cost)
        .map_err(|_| ParseError::syntax(line_number, format!("edge cost {} is too large", cost)))
}
