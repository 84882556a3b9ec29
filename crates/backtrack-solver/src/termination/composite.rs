//! Composite termination condition (OR).
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use super::Termination;
use crate::stats::SearchStats;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// # Examples
///
/// ```
/// use backtrack_solver::stats::SearchStats;
/// use backtrack_solver::termination::{
///     NodeCountTermination, OrTermination, Termination, TimeTermination,
/// };
///
/// // Terminate after 30 seconds OR 1000 visited candidates
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(1000),
/// ));
///
/// let mut stats = SearchStats::default();
/// assert!(!termination.is_terminated(&stats));
/// stats.nodes_visited = 1000;
/// assert!(termination.is_terminated(&stats));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, stats: &SearchStats) -> bool {
                $((self.0).$idx.is_terminated(stats))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
