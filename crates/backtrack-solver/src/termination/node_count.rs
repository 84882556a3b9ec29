//! Node-count-based termination.

use super::Termination;
use crate::stats::SearchStats;

/// Terminates once `limit` candidates have been visited.
///
/// Rejected candidates count; a visit is a visit.
#[derive(Debug, Clone, Copy)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        stats.nodes_visited >= self.limit
    }
}
