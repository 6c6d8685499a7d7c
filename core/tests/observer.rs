mod common;

use common::{line_graph, sample_graph};
use graphsearch_core::{
    Algorithm, BreadthFirst, EventLog, RecordedStep, SearchAlgorithm, SearchError, StepEvent,
};

#[test]
fn test_bfs_frontier_snapshots_follow_queue() {
    let graph = sample_graph();
    let mut log = EventLog::new();
    BreadthFirst::new(&graph).search_with(Some(&mut log)).unwrap();

    let frontiers: Vec<Vec<u32>> = log
        .steps()
        .iter()
        .take(4)
        .map(|step| match step {
            RecordedStep::Expansion(detail) | RecordedStep::Generation(detail) => {
                detail.frontier.clone()
            }
            _ => panic!("unexpected {:?}", step),
        })
        .collect();

    assert_eq!(frontiers, vec![vec![], vec![1], vec![1, 3], vec![3]]);
}

#[test]
fn test_generation_event_carries_parent_path() {
    let graph = sample_graph();
    let mut log = EventLog::new();
    BreadthFirst::new(&graph).search_with(Some(&mut log)).unwrap();

    let from_one = log
        .generations()
        .find(|step| step.node == 1)
        .unwrap();
    assert_eq!(from_one.neighbor, Some(4));
    assert_eq!(from_one.path, vec![2, 1]);
    assert!(from_one.is_goal);
}

#[test]
fn test_last_expansion_is_goal_for_every_algorithm() {
    let graph = sample_graph();

    for algorithm in Algorithm::ALL {
        let mut log = EventLog::new();
        let result = algorithm
            .build(&graph)
            .unwrap()
            .search_with(Some(&mut log))
            .unwrap();

        let last = log.expansions().last().unwrap();
        assert!(last.is_goal, "{algorithm}");
        assert_eq!(Some(last.node), result.goal, "{algorithm}");
        assert_eq!(Some(&last.path), result.path.as_ref(), "{algorithm}");
    }
}

#[test]
fn test_observer_does_not_change_result() {
    let graph = sample_graph();

    for algorithm in Algorithm::ALL {
        let strategy = algorithm.build(&graph).unwrap();
        let plain = strategy.search().unwrap();
        let observed = strategy.search_with(Some(&mut EventLog::new())).unwrap();
        assert_eq!(plain, observed, "{algorithm}");
    }
}

#[test]
fn test_should_stop_cancels_before_next_expansion() {
    let graph = sample_graph();
    let mut log = EventLog::stopping_after(2);

    let error = BreadthFirst::new(&graph)
        .search_with(Some(&mut log))
        .unwrap_err();

    assert_eq!(error, SearchError::Cancelled { nodes_generated: 4 });
    assert_eq!(log.expansions().count(), 2);
}

#[test]
fn test_every_algorithm_honours_cancellation() {
    let graph = sample_graph();

    for algorithm in Algorithm::ALL {
        let mut log = EventLog::stopping_after(1);
        let outcome = algorithm
            .build(&graph)
            .unwrap()
            .search_with(Some(&mut log));

        assert!(
            matches!(outcome, Err(SearchError::Cancelled { .. })),
            "{algorithm}"
        );
        assert_eq!(log.expansions().count(), 1, "{algorithm}");
    }
}

#[test]
fn test_closure_observer() {
    let graph = line_graph();
    let mut expansions = 0;
    let mut generations = 0;
    let mut count = |event: &StepEvent<'_>| match event {
        StepEvent::Expansion(_) => expansions += 1,
        StepEvent::Generation(_) => generations += 1,
        _ => {}
    };

    BreadthFirst::new(&graph).search_with(Some(&mut count)).unwrap();

    assert_eq!(expansions, 3);
    assert_eq!(generations, 2);
}

#[test]
fn test_idastar_resets_once_per_iteration() {
    let graph = sample_graph();
    let mut log = EventLog::new();
    Algorithm::IdaStar
        .build(&graph)
        .unwrap()
        .search_with(Some(&mut log))
        .unwrap();

    let resets: Vec<usize> = log
        .steps()
        .iter()
        .filter_map(|step| match step {
            RecordedStep::Reset { iteration, .. } => Some(*iteration),
            _ => None,
        })
        .collect();
    assert_eq!(resets, vec![1, 2]);
    assert!(matches!(log.steps()[0], RecordedStep::Reset { iteration: 1, .. }));
}
