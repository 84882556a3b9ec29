//! Search-level scope.

use tracing::debug;

use crate::engine::{SearchOutcome, TerminationReason};
use crate::stats::SearchStats;
use crate::termination::Termination;

/// Mutable state shared by an engine and its termination for one run.
///
/// Once the termination fires the scope stays terminated, so an engine
/// unwinding through several levels sees a consistent answer.
pub struct SearchScope<'t, T: Termination + ?Sized> {
    termination: &'t T,
    stats: SearchStats,
    terminated: bool,
}

impl<'t, T: Termination + ?Sized> SearchScope<'t, T> {
    pub fn new(termination: &'t T) -> Self {
        Self {
            termination,
            stats: SearchStats::default(),
            terminated: false,
        }
    }

    pub fn start_search(&mut self) {
        self.stats.start();
        self.terminated = false;
    }

    /// Polls the termination, latching the first positive answer.
    pub fn should_terminate(&mut self) -> bool {
        if !self.terminated && self.termination.is_terminated(&self.stats) {
            self.terminated = true;
            debug!(
                event = "terminated",
                nodes = self.stats.nodes_visited,
                solutions = self.stats.solutions
            );
        }
        self.terminated
    }

    /// Returns the latched answer without polling.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Ends the run and reports why it ended.
    pub fn finish(mut self) -> SearchOutcome {
        self.stats.finish();
        let reason = if self.terminated {
            TerminationReason::Terminated
        } else {
            TerminationReason::Exhausted
        };
        SearchOutcome {
            stats: self.stats,
            reason,
        }
    }
}

impl<T: Termination + ?Sized> std::fmt::Debug for SearchScope<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchScope")
            .field("termination", &self.termination)
            .field("stats", &self.stats)
            .field("terminated", &self.terminated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::{NoTermination, NodeCountTermination};

    #[test]
    fn test_termination_latches() {
        let term = NodeCountTermination::new(1);
        let mut scope = SearchScope::new(&term);
        scope.start_search();

        assert!(!scope.should_terminate());
        scope.stats_mut().record_visit(0);
        assert!(scope.should_terminate());

        // Stays terminated even if the counters were reset.
        scope.stats_mut().nodes_visited = 0;
        assert!(scope.should_terminate());
        assert!(scope.is_terminated());
    }

    #[test]
    fn test_finish_reports_reason() {
        let mut scope = SearchScope::new(&NoTermination);
        scope.start_search();
        assert!(!scope.should_terminate());
        let outcome = scope.finish();
        assert_eq!(outcome.reason, TerminationReason::Exhausted);

        let term = NodeCountTermination::new(0);
        let mut scope = SearchScope::new(&term);
        assert!(scope.should_terminate());
        assert_eq!(scope.finish().reason, TerminationReason::Terminated);
    }
}
