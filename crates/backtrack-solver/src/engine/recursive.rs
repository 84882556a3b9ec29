//! Call-stack recursive depth-first engine.

use backtrack_config::ExplorationType;
use backtrack_core::{SearchSpace, SolutionSink};
use tracing::trace;

use super::SearchEngine;
use crate::scope::SearchScope;
use crate::termination::Termination;

/// Pre-order depth-first search by plain recursion.
///
/// Call depth equals tree height, so very deep trees can exhaust the
/// thread's stack; [`StackEngine`](super::StackEngine) visits in the same
/// order on the heap.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveEngine;

impl RecursiveEngine {
    fn visit<P, K, T>(
        &self,
        space: &P,
        candidate: P::Candidate,
        depth: usize,
        sink: &mut K,
        scope: &mut SearchScope<'_, T>,
    ) where
        P: SearchSpace + ?Sized,
        K: SolutionSink<P::Candidate> + ?Sized,
        T: Termination + ?Sized,
    {
        if scope.should_terminate() {
            return;
        }
        let stats = scope.stats_mut();
        stats.record_visit(depth);
        stats.observe_frontier(depth + 1);

        if space.reject(&candidate) {
            stats.record_reject();
            return;
        }

        let accepted = space.accept(&candidate);
        let children = space.children(&candidate);
        stats.record_expansion(0);

        if accepted {
            stats.record_solution();
            trace!(event = "solution", depth = depth, candidate = ?candidate);
            sink.receive(candidate);
        }

        for child in children {
            scope.stats_mut().record_child();
            self.visit(space, child, depth + 1, sink, scope);
            if scope.is_terminated() {
                break;
            }
        }
    }
}

impl SearchEngine for RecursiveEngine {
    fn exploration_type(&self) -> ExplorationType {
        ExplorationType::Recursive
    }

    fn search<P, K, T>(
        &self,
        space: &P,
        root: P::Candidate,
        sink: &mut K,
        scope: &mut SearchScope<'_, T>,
    ) where
        P: SearchSpace + ?Sized,
        K: SolutionSink<P::Candidate> + ?Sized,
        T: Termination + ?Sized,
    {
        self.visit(space, root, 0, sink, scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{search_recursive, search_with, TerminationReason};
    use crate::termination::SolutionCountTermination;
    use backtrack_test::BinaryTree;

    #[test]
    fn test_preorder_on_binary_tree() {
        let tree = BinaryTree::new(2).accept_all();
        let mut seen = Vec::new();
        search_recursive(&tree, String::new(), &mut |c: String| seen.push(c));
        assert_eq!(seen, vec!["", "0", "00", "01", "1", "10", "11"]);
    }

    #[test]
    fn test_call_depth_is_peak_frontier() {
        let tree = BinaryTree::new(6);
        let mut count = 0u64;
        let outcome = search_recursive(&tree, String::new(), &mut |_: String| count += 1);
        assert_eq!(count, 64);
        assert_eq!(outcome.stats.peak_frontier, 7);
        assert_eq!(outcome.stats.max_depth, 6);
    }

    #[test]
    fn test_stops_after_first_solution() {
        let tree = BinaryTree::new(4);
        let mut seen = Vec::new();
        let outcome = search_with(
            &RecursiveEngine,
            &tree,
            String::new(),
            &mut |c: String| seen.push(c),
            &SolutionCountTermination::new(1),
        );
        assert_eq!(seen, vec!["0000"]);
        assert_eq!(outcome.reason, TerminationReason::Terminated);
    }
}
