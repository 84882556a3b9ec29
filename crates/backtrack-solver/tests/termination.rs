//! Termination across engines.

use std::sync::atomic::{AtomicBool, Ordering};

use backtrack_core::CountingSink;
use backtrack_solver::{
    search_with, ExternalTermination, NodeCountTermination, OrTermination, QueueEngine,
    RecursiveEngine, SearchEngine, SearchOutcome, SolutionCountTermination, StackEngine,
    Termination, TerminationReason, TimeTermination,
};
use backtrack_test::BinaryTree;

fn run<E: SearchEngine, T: Termination>(engine: &E, termination: &T) -> (u64, SearchOutcome) {
    run_depth(8, engine, termination)
}

fn run_depth<E: SearchEngine, T: Termination>(
    depth: usize,
    engine: &E,
    termination: &T,
) -> (u64, SearchOutcome) {
    let tree = BinaryTree::new(depth);
    let mut sink = CountingSink::new();
    let outcome = search_with(engine, &tree, String::new(), &mut sink, termination);
    (sink.count(), outcome)
}

#[test]
fn test_node_count_limit_is_exact() {
    let term = NodeCountTermination::new(100);
    for outcome in [
        run(&RecursiveEngine, &term).1,
        run(&StackEngine, &term).1,
        run(&QueueEngine, &term).1,
    ] {
        assert_eq!(outcome.stats.nodes_visited, 100);
        assert_eq!(outcome.reason, TerminationReason::Terminated);
    }
}

#[test]
fn test_solution_count_limit() {
    let term = SolutionCountTermination::new(10);
    for (count, outcome) in [
        run(&RecursiveEngine, &term),
        run(&StackEngine, &term),
        run(&QueueEngine, &term),
    ] {
        assert_eq!(count, 10);
        assert_eq!(outcome.stats.solutions, 10);
        assert!(!outcome.is_exhausted());
    }
}

#[test]
fn test_zero_time_limit_visits_nothing() {
    let term = TimeTermination::millis(0);
    let (count, outcome) = run(&StackEngine, &term);
    assert_eq!(count, 0);
    assert_eq!(outcome.stats.nodes_visited, 0);
    assert_eq!(outcome.reason, TerminationReason::Terminated);
}

#[test]
fn test_external_flag_set_from_sink() {
    let flag = AtomicBool::new(false);
    let term = ExternalTermination::new(&flag);
    let tree = BinaryTree::new(8);
    let mut found = Vec::new();

    let outcome = search_with(
        &QueueEngine,
        &tree,
        String::new(),
        &mut |c: String| {
            found.push(c);
            if found.len() == 3 {
                flag.store(true, Ordering::SeqCst);
            }
        },
        &term,
    );

    assert_eq!(found, vec!["00000000", "00000001", "00000010"]);
    assert_eq!(outcome.reason, TerminationReason::Terminated);
}

#[test]
fn test_limits_that_never_fire_exhaust_the_tree() {
    let term = OrTermination((
        NodeCountTermination::new(1_000_000),
        SolutionCountTermination::new(1_000_000),
    ));
    for (count, outcome) in [
        run(&RecursiveEngine, &term),
        run(&StackEngine, &term),
        run(&QueueEngine, &term),
    ] {
        assert_eq!(count, 256);
        assert_eq!(outcome.reason, TerminationReason::Exhausted);
    }
}

#[test]
fn test_limit_reached_on_last_candidate_is_exhausted() {
    // Depth 2 has 7 nodes and 4 leaves.
    let solutions = SolutionCountTermination::new(4);
    let nodes = NodeCountTermination::new(7);
    for (count, outcome) in [
        run_depth(2, &RecursiveEngine, &solutions),
        run_depth(2, &StackEngine, &solutions),
        run_depth(2, &QueueEngine, &solutions),
        run_depth(2, &RecursiveEngine, &nodes),
        run_depth(2, &StackEngine, &nodes),
        run_depth(2, &QueueEngine, &nodes),
    ] {
        assert_eq!(count, 4);
        assert_eq!(outcome.stats.nodes_visited, 7);
        assert_eq!(outcome.reason, TerminationReason::Exhausted);
    }
}

#[test]
fn test_limit_one_short_of_the_tree_terminates() {
    let nodes = NodeCountTermination::new(6);
    for (_, outcome) in [
        run_depth(2, &RecursiveEngine, &nodes),
        run_depth(2, &StackEngine, &nodes),
        run_depth(2, &QueueEngine, &nodes),
    ] {
        assert_eq!(outcome.stats.nodes_visited, 6);
        assert_eq!(outcome.reason, TerminationReason::Terminated);
    }
}
