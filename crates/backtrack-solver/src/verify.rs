//! Monotonicity verification for `reject`.
//!
//! Engines cannot tell a sound prune from a lossy one. Under
//! [`EnvironmentMode::FullAssert`](backtrack_config::EnvironmentMode) the
//! solver wraps the space in [`MonotonicityCheck`], which probes one level
//! below every rejected candidate and records the first child that the
//! space failed to reject.

use std::cell::RefCell;
use std::fmt::{self, Debug};

use backtrack_core::{BacktrackError, Result, SearchSpace};
use tracing::warn;

/// A [`SearchSpace`] decorator that checks `reject` for monotonicity.
///
/// Behaves exactly like the wrapped space; only the extra `first_child`
/// and `next_sibling` calls made while probing are observable.
///
/// # Example
///
/// ```
/// use backtrack_core::{BacktrackError, FnSpace};
/// use backtrack_solver::{search_recursive, verify::MonotonicityCheck};
///
/// // Rejects exactly the value 1 but not its children 11..=13.
/// let space = FnSpace::new(
///     |n: &u32| *n == 1,
///     |_: &u32| true,
///     |n: &u32| (*n < 10).then(|| n * 10 + 1),
///     |n: &u32| (n % 10 < 3).then(|| n + 1),
/// );
///
/// let checked = MonotonicityCheck::new(&space);
/// search_recursive(&checked, 0, &mut |_: u32| {});
/// let err = checked.into_result().unwrap_err();
/// assert!(matches!(err, BacktrackError::NonMonotoneReject { .. }));
/// ```
pub struct MonotonicityCheck<'a, P: SearchSpace + ?Sized> {
    inner: &'a P,
    violation: RefCell<Option<BacktrackError>>,
}

impl<'a, P: SearchSpace + ?Sized> MonotonicityCheck<'a, P> {
    pub fn new(inner: &'a P) -> Self {
        Self {
            inner,
            violation: RefCell::new(None),
        }
    }

    /// Returns true once a violation has been recorded.
    pub fn has_violation(&self) -> bool {
        self.violation.borrow().is_some()
    }

    /// Consumes the check, returning the first violation found.
    pub fn into_result(self) -> Result<()> {
        match self.violation.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn probe(&self, rejected: &P::Candidate) {
        for child in self.inner.children(rejected) {
            if !self.inner.reject(&child) {
                warn!(
                    event = "non_monotone_reject",
                    rejected = ?rejected,
                    descendant = ?child
                );
                *self.violation.borrow_mut() = Some(BacktrackError::NonMonotoneReject {
                    rejected: format!("{rejected:?}"),
                    descendant: format!("{child:?}"),
                });
                return;
            }
        }
    }
}

impl<P: SearchSpace + ?Sized> SearchSpace for MonotonicityCheck<'_, P> {
    type Candidate = P::Candidate;

    fn reject(&self, candidate: &Self::Candidate) -> bool {
        let rejected = self.inner.reject(candidate);
        if rejected && !self.has_violation() {
            self.probe(candidate);
        }
        rejected
    }

    fn accept(&self, candidate: &Self::Candidate) -> bool {
        self.inner.accept(candidate)
    }

    fn first_child(&self, candidate: &Self::Candidate) -> Option<Self::Candidate> {
        self.inner.first_child(candidate)
    }

    fn next_sibling(&self, candidate: &Self::Candidate) -> Option<Self::Candidate> {
        self.inner.next_sibling(candidate)
    }
}

impl<P: SearchSpace + ?Sized> Debug for MonotonicityCheck<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonotonicityCheck")
            .field("violation", &self.violation.borrow())
            .finish()
    }
}
