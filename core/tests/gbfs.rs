mod common;

use common::{line_graph, sample_graph};
use graphsearch_core::{
    Algorithm, EventLog, GraphBuilder, GreedyBestFirst, Point, SearchAlgorithm, SearchError,
};

#[test]
fn test_gbfs_follows_heuristic() {
    let graph = sample_graph();
    let result = GreedyBestFirst::new(&graph).unwrap().search().unwrap();

    assert_eq!(result.path, Some(vec![2, 3, 5]));
    assert_eq!(result.goal, Some(5));
    assert_eq!(result.nodes_generated, 6);
}

#[test]
fn test_gbfs_reports_heuristic_metrics() {
    let graph = sample_graph();
    let mut log = EventLog::new();
    GreedyBestFirst::new(&graph)
        .unwrap()
        .search_with(Some(&mut log))
        .unwrap();

    let first = log.expansions().next().unwrap();
    assert_eq!(first.node, 2);
    let h = first.metrics.h.unwrap();
    assert!((h - 17f64.sqrt()).abs() < 1e-9);
    assert_eq!(first.metrics.g, None);

    let goal = log.expansions().last().unwrap();
    assert_eq!(goal.metrics.h, Some(0.0));
}

#[test]
fn test_gbfs_can_return_costlier_path() {
    // The straight-line pull toward 3 hides an expensive edge.
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

    let greedy = GreedyBestFirst::new(&graph).unwrap().search().unwrap();
    assert_eq!(greedy.path, Some(vec![1, 2, 3]));
    assert_eq!(greedy.path_cost(&graph), Some(59));
}

#[test]
fn test_gbfs_line_graph() {
    let graph = line_graph();
    let result = GreedyBestFirst::new(&graph).unwrap().search().unwrap();

    assert_eq!(result.path, Some(vec![1, 2, 3]));
    assert_eq!(result.nodes_generated, 3);
}

#[test]
fn test_gbfs_requires_destination_coordinates() {
    let mut builder = GraphBuilder::new();
    builder
        .add_node(1, Point::new(0, 0))
        .add_edge(1, 7, 3)
        .origin(1)
        .destination(7);
    let graph = builder.build().unwrap();

    assert_eq!(
        GreedyBestFirst::new(&graph).err(),
        Some(SearchError::MissingCoordinates(7))
    );
    assert!(matches!(
        Algorithm::Gbfs.build(&graph),
        Err(SearchError::MissingCoordinates(7))
    ));
}
