//! Solution-count-based termination.

use super::Termination;
use crate::stats::SearchStats;

/// Terminates once `limit` solutions have been delivered.
///
/// `SolutionCountTermination::new(1)` turns any engine into a
/// first-solution search.
#[derive(Debug, Clone, Copy)]
pub struct SolutionCountTermination {
    limit: u64,
}

impl SolutionCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for SolutionCountTermination {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        stats.solutions >= self.limit
    }
}
