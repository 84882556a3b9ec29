//! Known answers for the password space.

use backtrack_core::CountingSink;
use backtrack_password::{PasswordRules, PasswordSpace};
use backtrack_solver::{
    search_queue, search_recursive, search_stack, search_with, ExplorationType, QueueEngine,
    RecursiveEngine, SearchConfig, SolutionCountTermination, Solver, StackEngine,
    TerminationReason,
};

fn bounded(max_len: usize) -> PasswordSpace {
    PasswordSpace::new(PasswordRules::reference().with_max_len(max_len)).unwrap()
}

fn first_solution<E: backtrack_solver::SearchEngine>(engine: &E, space: &PasswordSpace) -> String {
    let mut found = Vec::new();
    let outcome = search_with(
        engine,
        space,
        String::new(),
        &mut |c: String| found.push(c),
        &SolutionCountTermination::new(1),
    );
    assert_eq!(outcome.reason, TerminationReason::Terminated);
    assert_eq!(found.len(), 1);
    found.remove(0)
}

#[test]
fn test_first_solution_on_reference_rules() {
    let space = PasswordSpace::reference();
    assert_eq!(first_solution(&RecursiveEngine, &space), "aab00");
    assert_eq!(first_solution(&StackEngine, &space), "aab00");
    assert_eq!(first_solution(&QueueEngine, &space), "b00");
}

#[test]
fn test_length_three_bound() {
    let space = bounded(3);
    let mut recursive = Vec::new();
    let mut queue = Vec::new();
    search_recursive(&space, String::new(), &mut |c: String| recursive.push(c));
    search_queue(&space, String::new(), &mut |c: String| queue.push(c));

    assert_eq!(recursive.len(), 300);
    assert_eq!(recursive[0], "b00");
    // Every solution has the same length, so both orders coincide.
    assert_eq!(recursive, queue);
    assert!(recursive.iter().all(|c| c.len() == 3 && c.contains('b')));
}

#[test]
fn test_length_four_bound() {
    let space = bounded(4);
    let mut recursive = Vec::new();
    let mut stack = Vec::new();
    search_recursive(&space, String::new(), &mut |c: String| recursive.push(c));
    search_stack(&space, String::new(), &mut |c: String| stack.push(c));

    assert_eq!(recursive.len(), 34_900);
    assert_eq!(recursive[0], "ab00");
    assert_eq!(recursive, stack);
    assert_eq!(recursive.iter().filter(|c| c.len() == 3).count(), 300);
}

#[test]
fn test_small_alphabet() {
    let rules = PasswordRules::reference().with_alphabet("ab01").with_max_len(4);
    let space = PasswordSpace::new(rules).unwrap();
    let mut found = Vec::new();
    search_stack(&space, String::new(), &mut |c: String| found.push(c));
    assert_eq!(found.len(), 116);
    assert_eq!(found[0], "ab00");
}

#[test]
fn test_solver_from_config_file_contents() {
    let config = SearchConfig::from_toml_str(
        r#"
        exploration_type = "breadth_first"
        environment_mode = "full_assert"

        [termination]
        solution_count_limit = 5
    "#,
    )
    .unwrap();
    let solver = Solver::from_config(PasswordSpace::reference(), &config);
    assert_eq!(solver.exploration_type(), ExplorationType::BreadthFirst);

    let mut found = Vec::new();
    let outcome = solver
        .solve(String::new(), &mut |c: String| found.push(c))
        .unwrap();
    assert_eq!(found, vec!["b00", "b01", "b02", "b03", "b04"]);
    assert_eq!(outcome.reason, TerminationReason::Terminated);
}

#[test]
#[ignore = "enumerates the full reference tree (about 62 million candidates)"]
fn test_reference_total_count() {
    for exploration_type in [ExplorationType::Recursive, ExplorationType::DepthFirst] {
        let solver = Solver::new(PasswordSpace::reference()).with_exploration_type(exploration_type);
        let mut sink = CountingSink::new();
        let outcome = solver.solve(String::new(), &mut sink).unwrap();
        assert_eq!(sink.count(), 2_545_900, "{exploration_type}");
        assert!(outcome.is_exhausted());
    }
}
