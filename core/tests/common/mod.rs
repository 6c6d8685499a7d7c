#![allow(dead_code)]

use graphsearch_core::{Graph, GraphBuilder, NodeId, Point, parse_graph};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Six nodes, two destinations (4 and 5), origin 2.
pub const SAMPLE_GRAPH: &str = "\
Nodes:
1: (4,1)
2: (2,2)
3: (4,4)
4: (6,3)
5: (5,6)
6: (7,5)
Edges:
(2,1): 4
(3,1): 5
(1,3): 5
(2,3): 4
(3,2): 5
(4,1): 6
(1,4): 6
(4,3): 5
(3,5): 6
(5,3): 6
(4,5): 7
(5,4): 8
(6,3): 7
(3,6): 7
Origin:
2
Destinations:
5; 4
";

pub fn sample_graph() -> Graph {
    parse_graph(SAMPLE_GRAPH).unwrap()
}

/// 1 -> 2 -> 3 on a line, destination 3.
pub fn line_graph() -> Graph {
    let mut builder = GraphBuilder::new();
    builder
        .add_node(1, Point::new(0, 0))
        .add_node(2, Point::new(1, 0))
        .add_node(3, Point::new(2, 0))
        .add_edge(1, 2, 1)
        .add_edge(2, 3, 1)
        .origin(1)
        .destination(3);
    builder.build().unwrap()
}

/// Cycle 1 -> 2 -> 3 -> 1 with an unreachable destination 4. Every node on
/// the cycle has `g + h == h(origin)`, so IDA* explores the whole cycle in
/// its first iteration.
pub fn unreachable_goal_graph() -> Graph {
    let mut builder = GraphBuilder::new();
    builder
        .add_node(1, Point::new(0, 0))
        .add_node(2, Point::new(5, 0))
        .add_node(3, Point::new(6, 0))
        .add_node(4, Point::new(10, 0))
        .add_edge(1, 2, 5)
        .add_edge(2, 3, 1)
        .add_edge(3, 1, 6)
        .origin(1)
        .destination(4);
    builder.build().unwrap()
}

/// Origin 1 is itself a destination.
pub fn origin_is_goal_graph() -> Graph {
    let mut builder = GraphBuilder::new();
    builder
        .add_node(1, Point::new(0, 0))
        .add_node(2, Point::new(3, 4))
        .add_edge(1, 2, 5)
        .origin(1)
        .destination(1)
        .destination(2);
    builder.build().unwrap()
}

/// Random digraph whose edge costs never undercut the straight-line
/// distance, so the heuristic stays admissible.
pub fn random_graph(seed: u64, node_count: NodeId, edge_count: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new();
    let mut points = Vec::new();

    for id in 1..=node_count {
        let point = Point::new(rng.random_range(0..10), rng.random_range(0..10));
        builder.add_node(id, point);
        points.push(point);
    }

    for _ in 0..edge_count {
        let from = rng.random_range(1..=node_count);
        let to = rng.random_range(1..=node_count);
        if from == to {
            continue;
        }
        let distance = points[from as usize - 1].distance(&points[to as usize - 1]);
        let cost = distance.ceil() as u32 + rng.random_range(0..3);
        builder.add_edge(from, to, cost);
    }

    builder.origin(1);
    builder.destination(rng.random_range(2..=node_count));
    if rng.random_bool(0.5) {
        builder.destination(rng.random_range(2..=node_count));
    }
    builder.build().unwrap()
}

/// Cheapest cost from the origin to any destination, by enumerating every
/// simple path.
pub fn exhaustive_best_cost(graph: &Graph) -> Option<u64> {
    fn walk(
        graph: &Graph,
        node: NodeId,
        cost: u64,
        on_path: &mut Vec<NodeId>,
        best: &mut Option<u64>,
    ) {
        if graph.is_destination(node) {
            *best = Some(best.map_or(cost, |current| current.min(cost)));
            return;
        }
        for edge in graph.neighbors(node) {
            if on_path.contains(&edge.to) {
                continue;
            }
            on_path.push(edge.to);
            walk(graph, edge.to, cost + u64::from(edge.cost), on_path, best);
            on_path.pop();
        }
    }

    let mut best = None;
    let mut on_path = vec![graph.origin()];
    walk(graph, graph.origin(), 0, &mut on_path, &mut best);
    best
}

/// Fewest edges from the origin to any destination.
pub fn fewest_hops(graph: &Graph) -> Option<usize> {
    let mut depth = rustc_hash::FxHashMap::default();
    let mut queue = std::collections::VecDeque::from([graph.origin()]);
    depth.insert(graph.origin(), 0usize);

    while let Some(node) = queue.pop_front() {
        let hops = depth[&node];
        if graph.is_destination(node) {
            return Some(hops);
        }
        for edge in graph.neighbors(node) {
            if !depth.contains_key(&edge.to) {
                depth.insert(edge.to, hops + 1);
                queue.push_back(edge.to);
            }
        }
    }
    None
}

/// Nodes generated by an uninformed search that expands every reachable node
/// once and generates every successor, the origin counted once.
pub fn exhaustive_generations(graph: &Graph) -> usize {
    let mut seen = rustc_hash::FxHashSet::default();
    let mut stack = vec![graph.origin()];
    let mut generated = 1;
    seen.insert(graph.origin());

    while let Some(node) = stack.pop() {
        for edge in graph.neighbors(node) {
            generated += 1;
            if seen.insert(edge.to) {
                stack.push(edge.to);
            }
        }
    }
    generated
}
