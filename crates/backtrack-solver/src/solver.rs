//! Solver: a search space bound to a strategy and a termination.

use std::path::Path;

use backtrack_config::{EnvironmentMode, ExplorationType, SearchConfig};
use backtrack_core::{BacktrackError, Result, SearchSpace, SolutionSink};
use tracing::info;

use crate::engine::{QueueEngine, RecursiveEngine, SearchEngine, SearchOutcome, StackEngine};
use crate::scope::SearchScope;
use crate::termination::{self, ConfiguredTermination, NoTermination, Termination};
use crate::verify::MonotonicityCheck;

/// Runs searches over one space with a fixed configuration.
///
/// # Example
///
/// ```
/// use backtrack_core::FnSpace;
/// use backtrack_solver::{ExplorationType, Solver};
///
/// // Subsets of {1, 2, 3} as increasing sequences, accepting sum == 3.
/// let space = FnSpace::new(
///     |s: &Vec<u32>| s.iter().sum::<u32>() > 3,
///     |s: &Vec<u32>| s.iter().sum::<u32>() == 3,
///     |s: &Vec<u32>| {
///         let next = s.last().map_or(1, |l| l + 1);
///         (next <= 3).then(|| {
///             let mut child = s.clone();
///             child.push(next);
///             child
///         })
///     },
///     |s: &Vec<u32>| {
///         let mut sibling = s.clone();
///         let last = sibling.last_mut()?;
///         if *last >= 3 {
///             return None;
///         }
///         *last += 1;
///         Some(sibling)
///     },
/// );
///
/// let solver = Solver::new(space).with_exploration_type(ExplorationType::BreadthFirst);
/// let mut found = Vec::new();
/// let outcome = solver.solve(vec![], &mut |s: Vec<u32>| found.push(s)).unwrap();
///
/// assert_eq!(found, vec![vec![3], vec![1, 2]]);
/// assert!(outcome.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct Solver<P, T = NoTermination> {
    space: P,
    exploration_type: ExplorationType,
    environment_mode: EnvironmentMode,
    termination: T,
}

impl<P: SearchSpace> Solver<P, NoTermination> {
    /// Creates a recursive, unterminated, production solver.
    pub fn new(space: P) -> Self {
        Self {
            space,
            exploration_type: ExplorationType::default(),
            environment_mode: EnvironmentMode::default(),
            termination: NoTermination,
        }
    }
}

impl<P: SearchSpace> Solver<P, ConfiguredTermination> {
    /// Creates a solver from a [`SearchConfig`].
    pub fn from_config(space: P, config: &SearchConfig) -> Self {
        Self {
            space,
            exploration_type: config.exploration_type,
            environment_mode: config.environment_mode,
            termination: termination::from_config(config.termination.as_ref()),
        }
    }

    /// Loads a TOML configuration file and builds a solver from it.
    ///
    /// # Errors
    ///
    /// Returns [`BacktrackError::Config`] if the file is missing or invalid.
    pub fn from_config_file(space: P, path: impl AsRef<Path>) -> Result<Self> {
        let config =
            SearchConfig::load(path).map_err(|err| BacktrackError::Config(err.to_string()))?;
        Ok(Self::from_config(space, &config))
    }
}

impl<P: SearchSpace, T: Termination> Solver<P, T> {
    pub fn with_exploration_type(mut self, exploration_type: ExplorationType) -> Self {
        self.exploration_type = exploration_type;
        self
    }

    pub fn with_environment_mode(mut self, environment_mode: EnvironmentMode) -> Self {
        self.environment_mode = environment_mode;
        self
    }

    /// Replaces the termination.
    pub fn with_termination<T2: Termination>(self, termination: T2) -> Solver<P, T2> {
        Solver {
            space: self.space,
            exploration_type: self.exploration_type,
            environment_mode: self.environment_mode,
            termination,
        }
    }

    pub fn space(&self) -> &P {
        &self.space
    }

    pub fn exploration_type(&self) -> ExplorationType {
        self.exploration_type
    }

    pub fn environment_mode(&self) -> EnvironmentMode {
        self.environment_mode
    }

    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Searches from `root`, delivering every solution to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`BacktrackError::NonMonotoneReject`] when running under
    /// [`EnvironmentMode::FullAssert`] and `reject` pruned a candidate with
    /// a child it does not reject. The solutions delivered before the
    /// error are unreliable.
    pub fn solve<K>(&self, root: P::Candidate, sink: &mut K) -> Result<SearchOutcome>
    where
        K: SolutionSink<P::Candidate> + ?Sized,
    {
        info!(
            event = "search_start",
            engine = %self.exploration_type,
            environment_mode = ?self.environment_mode,
        );

        let outcome = if self.environment_mode.is_asserted() {
            let checked = MonotonicityCheck::new(&self.space);
            let outcome = self.run(&checked, root, sink);
            checked.into_result()?;
            outcome
        } else {
            self.run(&self.space, root, sink)
        };

        let stats = &outcome.stats;
        info!(
            event = "search_end",
            engine = %self.exploration_type,
            nodes = stats.nodes_visited,
            solutions = stats.solutions,
            rejected = stats.rejected,
            expansions = stats.expansions,
            peak_frontier = stats.peak_frontier as u64,
            max_depth = stats.max_depth as u64,
            duration_ms = stats.elapsed().as_millis() as u64,
            speed = stats.nodes_per_second() as u64,
            reason = %outcome.reason,
        );
        Ok(outcome)
    }

    fn run<S, K>(&self, space: &S, root: P::Candidate, sink: &mut K) -> SearchOutcome
    where
        S: SearchSpace<Candidate = P::Candidate> + ?Sized,
        K: SolutionSink<P::Candidate> + ?Sized,
    {
        let mut scope = SearchScope::new(&self.termination);
        scope.start_search();
        match self.exploration_type {
            ExplorationType::Recursive => RecursiveEngine.search(space, root, sink, &mut scope),
            ExplorationType::DepthFirst => StackEngine.search(space, root, sink, &mut scope),
            ExplorationType::BreadthFirst => QueueEngine.search(space, root, sink, &mut scope),
        }
        scope.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TerminationReason;
    use crate::termination::SolutionCountTermination;
    use backtrack_core::CountingSink;
    use backtrack_test::BinaryTree;

    #[test]
    fn test_every_exploration_type_finds_all_leaves() {
        for exploration_type in [
            ExplorationType::Recursive,
            ExplorationType::DepthFirst,
            ExplorationType::BreadthFirst,
        ] {
            let solver = Solver::new(BinaryTree::new(5)).with_exploration_type(exploration_type);
            let mut sink = CountingSink::new();
            let outcome = solver.solve(String::new(), &mut sink).unwrap();
            assert_eq!(sink.count(), 32, "{exploration_type}");
            assert_eq!(outcome.stats.solutions, 32);
            assert!(outcome.is_exhausted());
        }
    }

    #[test]
    fn test_from_config() {
        let config = SearchConfig::new()
            .with_exploration_type(ExplorationType::DepthFirst)
            .with_solution_count_limit(3);
        let solver = Solver::from_config(BinaryTree::new(4), &config);
        assert_eq!(solver.exploration_type(), ExplorationType::DepthFirst);

        let mut seen = Vec::new();
        let outcome = solver
            .solve(String::new(), &mut |c: String| seen.push(c))
            .unwrap();
        assert_eq!(seen, vec!["0000", "0001", "0010"]);
        assert_eq!(outcome.reason, TerminationReason::Terminated);
    }

    #[test]
    fn test_missing_config_file() {
        let err = Solver::from_config_file(BinaryTree::new(2), "/nonexistent/backtrack.toml")
            .unwrap_err();
        assert!(matches!(err, BacktrackError::Config(_)), "{err}");
    }

    #[test]
    fn test_with_termination() {
        let solver = Solver::new(BinaryTree::new(4))
            .with_exploration_type(ExplorationType::BreadthFirst)
            .with_termination(SolutionCountTermination::new(2));
        let mut sink = CountingSink::new();
        let outcome = solver.solve(String::new(), &mut sink).unwrap();
        assert_eq!(sink.count(), 2);
        assert!(!outcome.is_exhausted());
    }

    #[test]
    fn test_full_assert_passes_monotone_space() {
        let solver = Solver::new(BinaryTree::new(4).rejecting("1"))
            .with_environment_mode(EnvironmentMode::FullAssert);
        let mut sink = CountingSink::new();
        let outcome = solver.solve(String::new(), &mut sink).unwrap();
        assert_eq!(sink.count(), 8);
        assert_eq!(outcome.stats.rejected, 1);
    }

    #[test]
    fn test_full_assert_reports_non_monotone_reject() {
        let solver = Solver::new(BinaryTree::new(4).rejecting_exactly("01"))
            .with_exploration_type(ExplorationType::DepthFirst)
            .with_environment_mode(EnvironmentMode::FullAssert);
        let err = solver
            .solve(String::new(), &mut CountingSink::new())
            .unwrap_err();
        assert!(matches!(err, BacktrackError::NonMonotoneReject { .. }), "{err}");
    }

    #[test]
    fn test_production_ignores_non_monotone_reject() {
        let solver = Solver::new(BinaryTree::new(4).rejecting_exactly("01"));
        let mut sink = CountingSink::new();
        solver.solve(String::new(), &mut sink).unwrap();
        assert_eq!(sink.count(), 12);
    }
}
