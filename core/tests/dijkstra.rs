mod common;

use common::sample_graph;
use graphsearch_core::{Dijkstra, EventLog, GraphBuilder, SearchAlgorithm};

#[test]
fn test_dijkstra_finds_cheapest_path() {
    let graph = sample_graph();
    let result = Dijkstra::new(&graph).search().unwrap();

    assert_eq!(result.path, Some(vec![2, 1, 4]));
    assert_eq!(result.goal, Some(4));
    // 2, then 1 and 3, then 4 from 1, then 5 and 6 from 3; 4 pops before 5
    // on the tie at g=10.
    assert_eq!(result.nodes_generated, 6);
    assert_eq!(result.path_cost(&graph), Some(10));
}

#[test]
fn test_dijkstra_prefers_cheaper_longer_path() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge(1, 2, 10)
        .add_edge(1, 3, 1)
        .add_edge(3, 2, 1)
        .add_edge(2, 4, 1)
        .origin(1)
        .destination(4);
    let graph = builder.build().unwrap();

    let result = Dijkstra::new(&graph).search().unwrap();
    assert_eq!(result.path, Some(vec![1, 3, 2, 4]));
    assert_eq!(result.path_cost(&graph), Some(3));
    // 2 is pushed twice: once at cost 10, again at cost 2.
    assert_eq!(result.nodes_generated, 5);
}

#[test]
fn test_dijkstra_skips_stale_entries() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge(1, 2, 10)
        .add_edge(1, 3, 1)
        .add_edge(3, 2, 1)
        .origin(1)
        .destination(9);
    let graph = builder.build().unwrap();

    let mut log = EventLog::new();
    let result = Dijkstra::new(&graph).search_with(Some(&mut log)).unwrap();

    assert_eq!(result.path, None);
    let expanded: Vec<u32> = log.expansions().map(|step| step.node).collect();
    assert_eq!(expanded, vec![1, 3, 2]);
    let costs: Vec<Option<u64>> = log.expansions().map(|step| step.metrics.g).collect();
    assert_eq!(costs, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn test_dijkstra_equal_cost_does_not_repush() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge(1, 2, 1)
        .add_edge(1, 3, 1)
        .add_edge(2, 4, 1)
        .add_edge(3, 4, 1)
        .origin(1)
        .destination(4);
    let graph = builder.build().unwrap();

    let result = Dijkstra::new(&graph).search().unwrap();
    assert_eq!(result.path, Some(vec![1, 2, 4]));
    assert_eq!(result.nodes_generated, 4);
}

#[test]
fn test_dijkstra_uses_cheapest_parallel_edge() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge(1, 2, 9)
        .add_edge(1, 2, 2)
        .origin(1)
        .destination(2);
    let graph = builder.build().unwrap();

    let mut log = EventLog::new();
    let result = Dijkstra::new(&graph).search_with(Some(&mut log)).unwrap();

    assert_eq!(result.path, Some(vec![1, 2]));
    let goal_step = log.expansions().last().unwrap();
    assert_eq!(goal_step.metrics.g, Some(2));
    assert!(goal_step.is_goal);
}
