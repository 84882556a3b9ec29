//! Search engines.
//!
//! Three interchangeable traversals over a [`SearchSpace`]:
//!
//! - [`RecursiveEngine`]: call-stack recursion, pre-order.
//! - [`StackEngine`]: explicit LIFO frontier, same order as recursion.
//! - [`QueueEngine`]: explicit FIFO frontier, level order.
//!
//! All three deliver the same set of solutions. They differ in delivery
//! order (depth-first vs level order) and in how much memory the pending
//! candidates take.

mod queue;
mod recursive;
mod stack;

use std::fmt::{self, Debug};

use backtrack_config::ExplorationType;
use backtrack_core::{SearchSpace, SolutionSink};
use tracing::trace;

use crate::frontier::{Frontier, FrontierEntry};
use crate::scope::SearchScope;
use crate::stats::SearchStats;
use crate::termination::{NoTermination, Termination};

pub use queue::QueueEngine;
pub use recursive::RecursiveEngine;
pub use stack::StackEngine;

/// A traversal strategy.
///
/// Engines own no state between runs; everything a run needs lives in the
/// [`SearchScope`] and the engine's own frontier or call stack.
pub trait SearchEngine: Debug {
    /// The strategy this engine implements.
    fn exploration_type(&self) -> ExplorationType;

    /// Enumerates the accepted candidates reachable from `root` into `sink`.
    ///
    /// Polls the scope's termination before taking up each candidate.
    fn search<P, K, T>(
        &self,
        space: &P,
        root: P::Candidate,
        sink: &mut K,
        scope: &mut SearchScope<'_, T>,
    ) where
        P: SearchSpace + ?Sized,
        K: SolutionSink<P::Candidate> + ?Sized,
        T: Termination + ?Sized;
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every reachable candidate was visited or pruned.
    Exhausted,
    /// A termination condition fired; the solutions delivered are a prefix
    /// of the full enumeration.
    Terminated,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::Exhausted => write!(f, "Exhausted"),
            TerminationReason::Terminated => write!(f, "Terminated"),
        }
    }
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub stats: SearchStats,
    pub reason: TerminationReason,
}

impl SearchOutcome {
    /// Returns true if the whole tree was covered.
    pub fn is_exhausted(&self) -> bool {
        self.reason == TerminationReason::Exhausted
    }
}

/// Runs `engine` over `space` from `root` until exhausted or terminated.
pub fn search_with<E, P, K, T>(
    engine: &E,
    space: &P,
    root: P::Candidate,
    sink: &mut K,
    termination: &T,
) -> SearchOutcome
where
    E: SearchEngine + ?Sized,
    P: SearchSpace + ?Sized,
    K: SolutionSink<P::Candidate> + ?Sized,
    T: Termination + ?Sized,
{
    let mut scope = SearchScope::new(termination);
    scope.start_search();
    engine.search(space, root, sink, &mut scope);
    scope.finish()
}

/// Recursive depth-first search to exhaustion.
///
/// # Example
///
/// ```
/// use backtrack_core::FnSpace;
/// use backtrack_solver::search_recursive;
///
/// // Numbers 1..=3 each with children n*10+1..=n*10+3, one level deep.
/// let space = FnSpace::new(
///     |_: &u32| false,
///     |n: &u32| n % 2 == 1,
///     |n: &u32| (*n < 10).then(|| n * 10 + 1),
///     |n: &u32| (n % 10 < 3).then(|| n + 1),
/// );
///
/// let mut found = Vec::new();
/// let outcome = search_recursive(&space, 0, &mut |n: u32| found.push(n));
///
/// assert_eq!(found, vec![1, 11, 13, 21, 23, 3, 31, 33]);
/// assert!(outcome.is_exhausted());
/// ```
pub fn search_recursive<P, K>(space: &P, root: P::Candidate, sink: &mut K) -> SearchOutcome
where
    P: SearchSpace + ?Sized,
    K: SolutionSink<P::Candidate> + ?Sized,
{
    search_with(&RecursiveEngine, space, root, sink, &NoTermination)
}

/// Explicit-stack depth-first search to exhaustion.
///
/// Delivers solutions in the same order as [`search_recursive`].
pub fn search_stack<P, K>(space: &P, root: P::Candidate, sink: &mut K) -> SearchOutcome
where
    P: SearchSpace + ?Sized,
    K: SolutionSink<P::Candidate> + ?Sized,
{
    search_with(&StackEngine, space, root, sink, &NoTermination)
}

/// Breadth-first search to exhaustion.
///
/// Pending candidates grow with the width of the tree; keep the tree
/// bounded.
pub fn search_queue<P, K>(space: &P, root: P::Candidate, sink: &mut K) -> SearchOutcome
where
    P: SearchSpace + ?Sized,
    K: SolutionSink<P::Candidate> + ?Sized,
{
    search_with(&QueueEngine, space, root, sink, &NoTermination)
}

/// Shared loop of the frontier-based engines.
///
/// Takes one entry at a time; a rejected entry is discarded, any other is
/// offered to `accept` and then replaced by its children.
fn drain_frontier<F, P, K, T>(
    mut frontier: F,
    space: &P,
    root: P::Candidate,
    sink: &mut K,
    scope: &mut SearchScope<'_, T>,
) where
    F: Frontier<P::Candidate>,
    P: SearchSpace + ?Sized,
    K: SolutionSink<P::Candidate> + ?Sized,
    T: Termination + ?Sized,
{
    frontier.push(FrontierEntry::new(0, root));
    scope.stats_mut().observe_frontier(frontier.len());

    // An empty frontier ends the search before termination is polled, so a
    // limit reached on the last candidate still reports exhaustion.
    while !frontier.is_empty() && !scope.should_terminate() {
        let Some(FrontierEntry { depth, candidate }) = frontier.pop() else {
            break;
        };
        scope.stats_mut().record_visit(depth);

        if space.reject(&candidate) {
            scope.stats_mut().record_reject();
            continue;
        }

        let accepted = space.accept(&candidate);
        let children: Vec<P::Candidate> = space.children(&candidate).collect();
        scope.stats_mut().record_expansion(children.len() as u64);

        if accepted {
            scope.stats_mut().record_solution();
            trace!(event = "solution", depth = depth, candidate = ?candidate);
            sink.receive(candidate);
        }

        frontier.push_children(depth + 1, children);
        scope.stats_mut().observe_frontier(frontier.len());
    }
}
