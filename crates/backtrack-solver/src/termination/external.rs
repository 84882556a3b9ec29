//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};

use super::Termination;
use crate::stats::SearchStats;

/// Terminates when an external flag is set.
///
/// Lets another thread, or a signal handler, stop a running search.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use backtrack_solver::stats::SearchStats;
/// use backtrack_solver::termination::{ExternalTermination, Termination};
///
/// let flag = AtomicBool::new(false);
/// let term = ExternalTermination::new(&flag);
/// assert!(!term.is_terminated(&SearchStats::default()));
///
/// flag.store(true, Ordering::SeqCst);
/// assert!(term.is_terminated(&SearchStats::default()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExternalTermination<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination<'_> {
    fn is_terminated(&self, _stats: &SearchStats) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
