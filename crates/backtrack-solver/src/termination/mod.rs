//! Termination conditions for a search.
//!
//! Engines poll the termination before taking up each candidate. A
//! satisfied condition ends the search cooperatively; candidates already
//! delivered to the sink stay delivered.

mod composite;
mod external;
mod node_count;
mod solution_count;
mod time;

use std::fmt::Debug;

use backtrack_config::TerminationConfig;

use crate::stats::SearchStats;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use solution_count::SolutionCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, stats: &SearchStats) -> bool;
}

/// Never terminates; the search runs until the tree is exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _stats: &SearchStats) -> bool {
        false
    }
}

/// An absent condition never terminates.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(stats))
    }
}

impl<T: Termination + ?Sized> Termination for &T {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        (**self).is_terminated(stats)
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        (**self).is_terminated(stats)
    }
}

/// Termination built from a [`TerminationConfig`].
pub type ConfiguredTermination = OrTermination<(
    Option<TimeTermination>,
    Option<NodeCountTermination>,
    Option<SolutionCountTermination>,
)>;

/// Builds the termination described by `config`.
///
/// Limits that are not set never fire. With no limits at all the search
/// runs to exhaustion.
pub fn from_config(config: Option<&TerminationConfig>) -> ConfiguredTermination {
    let Some(config) = config else {
        return OrTermination((None, None, None));
    };
    OrTermination((
        config.time_limit().map(TimeTermination::new),
        config.node_count_limit.map(NodeCountTermination::new),
        config.solution_count_limit.map(SolutionCountTermination::new),
    ))
}
