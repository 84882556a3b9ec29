//! Decorators that observe or disable pruning.

use std::cell::{Cell, RefCell};

use backtrack_core::SearchSpace;

/// Number of calls made to each protocol function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub reject: u64,
    pub accept: u64,
    pub first_child: u64,
    pub next_sibling: u64,
}

/// Wraps a space and records how an engine drives it.
///
/// Keeps every candidate that was rejected and every candidate whose
/// children were requested, and counts `accept` calls made on candidates
/// the wrapped space rejects.
#[derive(Debug)]
pub struct Instrumented<P: SearchSpace> {
    inner: P,
    counts: Cell<CallCounts>,
    rejected: RefCell<Vec<P::Candidate>>,
    expanded: RefCell<Vec<P::Candidate>>,
    accepted_rejected: Cell<u64>,
}

impl<P> Instrumented<P>
where
    P: SearchSpace,
    P::Candidate: Clone,
{
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            counts: Cell::new(CallCounts::default()),
            rejected: RefCell::new(Vec::new()),
            expanded: RefCell::new(Vec::new()),
            accepted_rejected: Cell::new(0),
        }
    }

    pub fn counts(&self) -> CallCounts {
        self.counts.get()
    }

    /// Candidates for which `reject` returned true, in call order.
    pub fn rejected(&self) -> Vec<P::Candidate> {
        self.rejected.borrow().clone()
    }

    /// Candidates passed to `first_child`, in call order.
    pub fn expanded(&self) -> Vec<P::Candidate> {
        self.expanded.borrow().clone()
    }

    /// `accept` calls on candidates the wrapped space rejects.
    pub fn accepted_rejected(&self) -> u64 {
        self.accepted_rejected.get()
    }

    fn bump(&self, f: impl FnOnce(&mut CallCounts)) {
        let mut counts = self.counts.get();
        f(&mut counts);
        self.counts.set(counts);
    }
}

impl<P> SearchSpace for Instrumented<P>
where
    P: SearchSpace,
    P::Candidate: Clone,
{
    type Candidate = P::Candidate;

    fn reject(&self, candidate: &Self::Candidate) -> bool {
        self.bump(|c| c.reject += 1);
        let rejected = self.inner.reject(candidate);
        if rejected {
            self.rejected.borrow_mut().push(candidate.clone());
        }
        rejected
    }

    fn accept(&self, candidate: &Self::Candidate) -> bool {
        self.bump(|c| c.accept += 1);
        if self.inner.reject(candidate) {
            self.accepted_rejected.set(self.accepted_rejected.get() + 1);
        }
        self.inner.accept(candidate)
    }

    fn first_child(&self, candidate: &Self::Candidate) -> Option<Self::Candidate> {
        self.bump(|c| c.first_child += 1);
        self.expanded.borrow_mut().push(candidate.clone());
        self.inner.first_child(candidate)
    }

    fn next_sibling(&self, candidate: &Self::Candidate) -> Option<Self::Candidate> {
        self.bump(|c| c.next_sibling += 1);
        self.inner.next_sibling(candidate)
    }
}

/// Wraps a space and never rejects, enumerating the whole tree.
///
/// Acceptance still requires the wrapped space not to reject, so the
/// solution set is unchanged; only pruning is disabled.
#[derive(Debug, Clone)]
pub struct Unpruned<P>(pub P);

impl<P: SearchSpace> SearchSpace for Unpruned<P> {
    type Candidate = P::Candidate;

    fn reject(&self, _candidate: &Self::Candidate) -> bool {
        false
    }

    fn accept(&self, candidate: &Self::Candidate) -> bool {
        !self.0.reject(candidate) && self.0.accept(candidate)
    }

    fn first_child(&self, candidate: &Self::Candidate) -> Option<Self::Candidate> {
        self.0.first_child(candidate)
    }

    fn next_sibling(&self, candidate: &Self::Candidate) -> Option<Self::Candidate> {
        self.0.next_sibling(candidate)
    }
}
