use crate::error::GraphError;
use rustc_hash::{FxHashMap, FxHashSet};

pub type NodeId = u32;
pub type Cost = u32;

/// Integer position of a node on the plane. Only the heuristic looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

/// Directed edge stored in the adjacency list of its source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub cost: Cost,
}

/// Immutable weighted digraph with one origin and a set of destinations.
///
/// Every adjacency list is sorted by ascending neighbor id. The search
/// algorithms rely on that order for deterministic expansion and never
/// re-sort.
#[derive(Debug, Clone)]
pub struct Graph {
    coordinates: FxHashMap<NodeId, Point>,
    adjacency: FxHashMap<NodeId, Vec<Edge>>,
    origin: NodeId,
    destinations: FxHashSet<NodeId>,
}

impl Graph {
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    pub fn destinations(&self) -> &FxHashSet<NodeId> {
        &self.destinations
    }

    /// Destinations in ascending order.
    pub fn sorted_destinations(&self) -> Vec<NodeId> {
        let mut destinations: Vec<NodeId> = self.destinations.iter().copied().collect();
        destinations.sort_unstable();
        destinations
    }

    pub fn is_destination(&self, node: NodeId) -> bool {
        self.destinations.contains(&node)
    }

    pub fn coordinates(&self, node: NodeId) -> Option<Point> {
        self.coordinates.get(&node).copied()
    }

    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every node id that has coordinates or appears in an edge, ascending.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: FxHashSet<NodeId> = self.coordinates.keys().copied().collect();
        for (&from, edges) in &self.adjacency {
            nodes.insert(from);
            nodes.extend(edges.iter().map(|edge| edge.to));
        }
        let mut nodes: Vec<NodeId> = nodes.into_iter().collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Collects nodes and edges in any order and produces a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    coordinates: FxHashMap<NodeId, Point>,
    adjacency: FxHashMap<NodeId, Vec<Edge>>,
    origin: Option<NodeId>,
    destinations: FxHashSet<NodeId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: NodeId, point: Point) -> &mut Self {
        self.coordinates.insert(id, point);
        self.adjacency.entry(id).or_default();
        self
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: Cost) -> &mut Self {
        self.adjacency.entry(from).or_default().push(Edge { to, cost });
        self
    }

    pub fn origin(&mut self, id: NodeId) -> &mut Self {
        self.origin = Some(id);
        self
    }

    pub fn has_origin(&self) -> bool {
        self.origin.is_some()
    }

    pub fn destination(&mut self, id: NodeId) -> &mut Self {
        self.destinations.insert(id);
        self
    }

    pub fn build(&mut self) -> Result<Graph, GraphError> {
        let origin = self.origin.ok_or(GraphError::MissingOrigin)?;
        if self.destinations.is_empty() {
            return Err(GraphError::NoDestinations);
        }

        let mut adjacency = std::mem::take(&mut self.adjacency);
        for edges in adjacency.values_mut() {
            // Stable: parallel edges keep their file order.
            edges.sort_by_key(|edge| edge.to);
        }

        Ok(Graph {
            coordinates: std::mem::take(&mut self.coordinates),
            adjacency,
            origin,
            destinations: std::mem::take(&mut self.destinations),
        })
    }
}

/// Total cost of walking `path`, taking the cheapest edge for every hop.
///
/// Returns `None` when two consecutive nodes are not connected.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Option<u64> {
    path.windows(2).try_fold(0u64, |total, hop| {
        graph
            .neighbors(hop[0])
            .iter()
            .filter(|edge| edge.to == hop[1])
            .map(|edge| u64::from(edge.cost))
            .min()
            .map(|cost| total + cost)
    })
}
