//! Explicit-stack depth-first engine.

use backtrack_config::ExplorationType;
use backtrack_core::{SearchSpace, SolutionSink};

use super::{drain_frontier, SearchEngine};
use crate::frontier::LifoFrontier;
use crate::scope::SearchScope;
use crate::termination::Termination;

/// Pre-order depth-first search over a heap-allocated stack.
///
/// Delivers solutions in exactly the order [`RecursiveEngine`] does. The
/// stack holds at most height × branching factor candidates.
///
/// [`RecursiveEngine`]: super::RecursiveEngine
#[derive(Debug, Clone, Copy, Default)]
pub struct StackEngine;

impl SearchEngine for StackEngine {
    fn exploration_type(&self) -> ExplorationType {
        ExplorationType::DepthFirst
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
        drain_frontier(LifoFrontier::default(), space, root, sink, scope);
    }
}
