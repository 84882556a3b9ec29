//! Breadth-first engine.

use backtrack_config::ExplorationType;
use backtrack_core::{SearchSpace, SolutionSink};

use super::{drain_frontier, SearchEngine};
use crate::frontier::FifoFrontier;
use crate::scope::SearchScope;
use crate::termination::Termination;

/// Level-order search over a FIFO queue.
///
/// Every candidate at depth `d` is processed before any at depth `d + 1`.
/// The queue holds up to a whole level of the tree at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueEngine;

impl SearchEngine for QueueEngine {
    fn exploration_type(&self) -> ExplorationType {
        ExplorationType::BreadthFirst
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
        drain_frontier(FifoFrontier::default(), space, root, sink, scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::search_queue;
    use backtrack_test::BinaryTree;

    #[test]
    fn test_level_order() {
        let tree = BinaryTree::new(2).accept_all();
        let mut seen = Vec::new();
        search_queue(&tree, String::new(), &mut |c: String| seen.push(c));
        assert_eq!(seen, vec!["", "0", "1", "00", "01", "10", "11"]);
    }

    #[test]
    fn test_queue_holds_whole_level() {
        let tree = BinaryTree::new(4);
        let mut count = 0u64;
        let outcome = search_queue(&tree, String::new(), &mut |_: String| count += 1);
        assert_eq!(count, 16);
        assert_eq!(outcome.stats.peak_frontier, 16);
        assert_eq!(outcome.stats.nodes_visited, 31);
    }

    #[test]
    fn test_pruned_subtree_is_never_queued() {
        let tree = BinaryTree::new(3).rejecting("1");
        let mut seen = Vec::new();
        let outcome = search_queue(&tree, String::new(), &mut |c: String| seen.push(c));
        assert_eq!(seen, vec!["000", "001", "010", "011"]);
        // root, "0", "1", two at depth 2, four leaves
        assert_eq!(outcome.stats.nodes_visited, 9);
    }
}
