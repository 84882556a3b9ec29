//! Frontiers for the iterative engines.
//!
//! A frontier holds candidates that have been generated but not yet taken
//! up. The pop discipline alone decides the traversal order: LIFO gives
//! pre-order depth-first, FIFO gives level order.

use std::collections::VecDeque;

/// A candidate waiting in a frontier, tagged with its depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<C> {
    pub depth: usize,
    pub candidate: C,
}

impl<C> FrontierEntry<C> {
    pub fn new(depth: usize, candidate: C) -> Self {
        Self { depth, candidate }
    }
}

/// Container of pending candidates.
pub trait Frontier<C> {
    /// Adds one candidate.
    fn push(&mut self, entry: FrontierEntry<C>);

    /// Adds the children of one parent, given in sibling order.
    ///
    /// Implementations arrange them so that [`Frontier::pop`] yields
    /// siblings in that same order.
    fn push_children(&mut self, depth: usize, children: Vec<C>);

    /// Removes the next candidate to process.
    fn pop(&mut self) -> Option<FrontierEntry<C>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in, first-out frontier.
///
/// Children are pushed last-sibling first so that the first sibling sits
/// on top.
#[derive(Debug, Clone)]
pub struct LifoFrontier<C> {
    entries: Vec<FrontierEntry<C>>,
}

impl<C> Default for LifoFrontier<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C> Frontier<C> for LifoFrontier<C> {
    fn push(&mut self, entry: FrontierEntry<C>) {
        self.entries.push(entry);
    }

    fn push_children(&mut self, depth: usize, children: Vec<C>) {
        self.entries.extend(
            children
                .into_iter()
                .rev()
                .map(|c| FrontierEntry::new(depth, c)),
        );
    }

    fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.entries.pop()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// First-in, first-out frontier.
#[derive(Debug, Clone)]
pub struct FifoFrontier<C> {
    entries: VecDeque<FrontierEntry<C>>,
}

impl<C> Default for FifoFrontier<C> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<C> Frontier<C> for FifoFrontier<C> {
    fn push(&mut self, entry: FrontierEntry<C>) {
        self.entries.push_back(entry);
    }

    fn push_children(&mut self, depth: usize, children: Vec<C>) {
        self.entries
            .extend(children.into_iter().map(|c| FrontierEntry::new(depth, c)));
    }

    fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.entries.pop_front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
