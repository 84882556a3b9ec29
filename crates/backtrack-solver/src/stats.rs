//! Search statistics.
//!
//! Plain counters updated by the engines while they run.

use std::time::{Duration, Instant};

/// Counters for one search run.
///
/// # Example
///
/// ```
/// use backtrack_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_visit(0);
/// stats.record_expansion(2);
/// stats.record_visit(1);
/// stats.record_reject();
///
/// assert_eq!(stats.nodes_visited, 2);
/// assert_eq!(stats.rejected, 1);
/// assert_eq!(stats.children_generated, 2);
/// assert_eq!(stats.max_depth, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    frozen_elapsed: Option<Duration>,
    /// Candidates taken from the frontier (or entered by recursion).
    pub nodes_visited: u64,
    /// Visited candidates pruned by `reject`.
    pub rejected: u64,
    /// Candidates delivered to the sink.
    pub solutions: u64,
    /// Candidates whose sibling chain of children was generated.
    pub expansions: u64,
    /// Children produced across all expansions.
    pub children_generated: u64,
    /// Largest frontier length observed.
    ///
    /// For the recursive engine this is the deepest call nesting, the call
    /// stack being its frontier.
    pub peak_frontier: usize,
    /// Deepest visited candidate (root = 0).
    pub max_depth: usize,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.frozen_elapsed = None;
    }

    /// Freezes the elapsed time at its current value.
    pub fn finish(&mut self) {
        self.frozen_elapsed = Some(self.elapsed());
    }

    /// Returns the time spent searching.
    pub fn elapsed(&self) -> Duration {
        if let Some(elapsed) = self.frozen_elapsed {
            return elapsed;
        }
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a candidate taken up for processing at `depth`.
    pub fn record_visit(&mut self, depth: usize) {
        self.nodes_visited += 1;
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Records a candidate pruned by `reject`.
    pub fn record_reject(&mut self) {
        self.rejected += 1;
    }

    /// Records a candidate delivered to the sink.
    pub fn record_solution(&mut self) {
        self.solutions += 1;
    }

    /// Records the generation of a sibling chain of `children` candidates.
    pub fn record_expansion(&mut self, children: u64) {
        self.expansions += 1;
        self.children_generated += children;
    }

    /// Records one more child produced by an in-progress expansion.
    pub fn record_child(&mut self) {
        self.children_generated += 1;
    }

    /// Updates the frontier high-water mark.
    pub fn observe_frontier(&mut self, len: usize) {
        if len > self.peak_frontier {
            self.peak_frontier = len;
        }
    }

    /// Returns visited candidates per second.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_visited as f64 / secs
        } else {
            0.0
        }
    }
}
