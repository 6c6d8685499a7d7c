mod common;

use common::{line_graph, sample_graph};
use graphsearch_core::{AStar, EventLog, GraphBuilder, Point, SearchAlgorithm};

#[test]
fn test_astar_finds_optimal_path() {
    let graph = sample_graph();
    let result = AStar::new(&graph).unwrap().search().unwrap();

    // 2 -> 3 -> 5 and 2 -> 1 -> 4 both cost 10; 5 was pushed first.
    assert_eq!(result.path, Some(vec![2, 3, 5]));
    assert_eq!(result.goal, Some(5));
    assert_eq!(result.nodes_generated, 6);
    assert_eq!(result.path_cost(&graph), Some(10));
}

#[test]
fn test_astar_breaks_f_ties_by_smaller_h() {
    let mut builder = GraphBuilder::new();
    builder
        .add_node(1, Point::new(0, 0))
        .add_node(2, Point::new(4, 3))
        .add_node(3, Point::new(2, 0))
        .add_node(4, Point::new(4, 0))
        .add_edge(1, 2, 1)
        .add_edge(1, 3, 2)
        .add_edge(2, 4, 3)
        .add_edge(3, 4, 2)
        .origin(1)
        .destination(4);
    let graph = builder.build().unwrap();

    let mut log = EventLog::new();
    let result = AStar::new(&graph)
        .unwrap()
        .search_with(Some(&mut log))
        .unwrap();

    // 2 and 3 both have f = 4; 3 is closer to the goal and goes first even
    // though 2 was pushed earlier.
    let expanded: Vec<u32> = log.expansions().map(|step| step.node).collect();
    assert_eq!(expanded, vec![1, 3, 4]);
    assert_eq!(result.path, Some(vec![1, 3, 4]));
}

#[test]
fn test_astar_beats_greedy_on_deceptive_graph() {
    let mut builder = GraphBuilder::new();
    builder
        .add_node(1, Point::new(0, 0))
        .add_node(2, Point::new(9, 0))
        .add_node(3, Point::new(10, 0))
        .add_node(4, Point::new(0, 5))
        .add_edge(1, 2, 9)
        .add_edge(2, 3, 50)
        .add_edge(1, 4, 5)
        .add_edge(4, 3, 12)
        .origin(1)
        .destination(3);
    let graph = builder.build().unwrap();

    let result = AStar::new(&graph).unwrap().search().unwrap();
    assert_eq!(result.path, Some(vec![1, 4, 3]));
    assert_eq!(result.path_cost(&graph), Some(17));
}

#[test]
fn test_astar_reports_g_and_h() {
    let graph = line_graph();
    let mut log = EventLog::new();
    AStar::new(&graph)
        .unwrap()
        .search_with(Some(&mut log))
        .unwrap();

    let metrics: Vec<(Option<u64>, Option<f64>)> = log
        .expansions()
        .map(|step| (step.metrics.g, step.metrics.h))
        .collect();
    assert_eq!(
        metrics,
        vec![
            (Some(0), Some(2.0)),
            (Some(1), Some(1.0)),
            (Some(2), Some(0.0)),
        ]
    );
}

#[test]
fn test_astar_treats_missing_coordinates_as_zero() {
    // Node 5 has no coordinates; the search still completes.
    let mut builder = GraphBuilder::new();
    builder
        .add_node(1, Point::new(0, 0))
        .add_node(3, Point::new(4, 0))
        .add_edge(1, 5, 2)
        .add_edge(5, 3, 2)
        .origin(1)
        .destination(3);
    let graph = builder.build().unwrap();

    let result = AStar::new(&graph).unwrap().search().unwrap();
    assert_eq!(result.path, Some(vec![1, 5, 3]));
}
