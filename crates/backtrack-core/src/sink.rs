//! Solution sinks.
//!
//! A sink receives each accepted candidate exactly once, in the order the
//! engine visits them.

/// Receives accepted candidates from a search engine.
///
/// Implemented for every `FnMut(C)` closure, so the common case is:
///
/// ```
/// use backtrack_core::SolutionSink;
///
/// let mut found = Vec::new();
/// let mut sink = |c: String| found.push(c);
/// sink.receive("b00".to_string());
/// assert_eq!(found, vec!["b00".to_string()]);
/// ```
pub trait SolutionSink<C> {
    /// Takes ownership of one accepted candidate.
    fn receive(&mut self, candidate: C);
}

impl<C, F> SolutionSink<C> for F
where
    F: FnMut(C),
{
    fn receive(&mut self, candidate: C) {
        self(candidate)
    }
}

/// A sink that only counts solutions and drops them.
///
/// Useful for searches whose solution set is too large to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountingSink {
    count: u64,
}

impl CountingSink {
    /// Creates a sink with a zero count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of candidates received so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<C> SolutionSink<C> for CountingSink {
    fn receive(&mut self, _candidate: C) {
        self.count += 1;
    }
}
