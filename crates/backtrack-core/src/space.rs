//! The search space protocol.
//!
//! A search space is an implicit tree: it is never materialized, only
//! regenerated on demand through [`SearchSpace::first_child`] and
//! [`SearchSpace::next_sibling`]. Pruning is driven by
//! [`SearchSpace::reject`], solutions by [`SearchSpace::accept`].

use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// An implicit search tree with pruning and acceptance predicates.
///
/// # Contract
///
/// Engines rely on the following and cannot detect violations:
///
/// - `reject` is monotone: if it holds for a candidate, it holds for every
///   descendant of that candidate. A non-monotone `reject` silently loses
///   solutions.
/// - `accept` is only called on candidates for which `reject` returned false.
/// - `first_child` and `next_sibling` are pure functions of their argument
///   (and of fixed data owned by the space). Sibling order is a property of
///   the space, never of the engine.
/// - The tree is finite, or the search is given a termination condition.
///
/// # Example
///
/// ```
/// use backtrack_core::SearchSpace;
///
/// // Bit strings of length <= 2, accepting those with exactly one '1'.
/// struct Bits;
///
/// impl SearchSpace for Bits {
///     type Candidate = String;
///
///     fn reject(&self, c: &String) -> bool {
///         c.matches('1').count() > 1
///     }
///
///     fn accept(&self, c: &String) -> bool {
///         c.matches('1').count() == 1
///     }
///
///     fn first_child(&self, c: &String) -> Option<String> {
///         (c.len() < 2).then(|| format!("{c}0"))
///     }
///
///     fn next_sibling(&self, c: &String) -> Option<String> {
///         c.ends_with('0').then(|| format!("{}1", &c[..c.len() - 1]))
///     }
/// }
///
/// let children: Vec<String> = Bits.children(&"1".to_string()).collect();
/// assert_eq!(children, vec!["10".to_string(), "11".to_string()]);
/// ```
pub trait SearchSpace {
    /// One node of the search tree.
    type Candidate: Debug;

    /// Returns true if `candidate` and all of its descendants are excluded.
    fn reject(&self, candidate: &Self::Candidate) -> bool;

    /// Returns true if `candidate` itself is a solution.
    ///
    /// Precondition: `self.reject(candidate) == false`.
    fn accept(&self, candidate: &Self::Candidate) -> bool;

    /// Returns the first child of `candidate`, or `None` for a leaf.
    fn first_child(&self, candidate: &Self::Candidate) -> Option<Self::Candidate>;

    /// Returns the sibling following `candidate`, or `None` for the last one.
    fn next_sibling(&self, candidate: &Self::Candidate) -> Option<Self::Candidate>;

    /// Iterates the sibling chain of `candidate`'s children.
    ///
    /// Calls `first_child` once, then `next_sibling` on each yielded child.
    fn children<'a>(&'a self, candidate: &Self::Candidate) -> SiblingChain<'a, Self> {
        SiblingChain {
            space: self,
            next: self.first_child(candidate),
        }
    }
}

impl<P: SearchSpace + ?Sized> SearchSpace for &P {
    type Candidate = P::Candidate;

    fn reject(&self, candidate: &Self::Candidate) -> bool {
        (**self).reject(candidate)
    }

    fn accept(&self, candidate: &Self::Candidate) -> bool {
        (**self).accept(candidate)
    }

    fn first_child(&self, candidate: &Self::Candidate) -> Option<Self::Candidate> {
        (**self).first_child(candidate)
    }

    fn next_sibling(&self, candidate: &Self::Candidate) -> Option<Self::Candidate> {
        (**self).next_sibling(candidate)
    }
}

/// Iterator over one parent's children, in sibling order.
///
/// Created by [`SearchSpace::children`]. Each yielded child is an owned value
/// independent of every other child.
pub struct SiblingChain<'a, P: SearchSpace + ?Sized> {
    space: &'a P,
    next: Option<P::Candidate>,
}

impl<P: SearchSpace + ?Sized> Iterator for SiblingChain<'_, P> {
    type Item = P::Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.space.next_sibling(&current);
        Some(current)
    }
}

impl<P: SearchSpace + ?Sized> Debug for SiblingChain<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiblingChain")
            .field("next", &self.next)
            .finish()
    }
}

/// A search space assembled from four closures.
///
/// # Type Parameters
/// * `C` - Candidate type
/// * `R` - Reject predicate type
/// * `A` - Accept predicate type
/// * `F` - First child function type
/// * `N` - Next sibling function type
///
/// # Example
///
/// ```
/// use backtrack_core::{FnSpace, SearchSpace};
///
/// // Digits 0..=3 as children of every node, two digits deep.
/// let space = FnSpace::new(
///     |_: &Vec<u8>| false,
///     |c: &Vec<u8>| c.len() == 2,
///     |c: &Vec<u8>| {
///         (c.len() < 2).then(|| {
///             let mut child = c.clone();
///             child.push(0);
///             child
///         })
///     },
///     |c: &Vec<u8>| {
///         let mut sibling = c.clone();
///         let last = sibling.last_mut()?;
///         if *last >= 3 {
///             return None;
///         }
///         *last += 1;
///         Some(sibling)
///     },
/// );
///
/// assert_eq!(space.children(&vec![]).count(), 4);
/// ```
pub struct FnSpace<C, R, A, F, N>
where
    R: Fn(&C) -> bool,
    A: Fn(&C) -> bool,
    F: Fn(&C) -> Option<C>,
    N: Fn(&C) -> Option<C>,
{
    reject: R,
    accept: A,
    first_child: F,
    next_sibling: N,
    _phantom: PhantomData<fn() -> C>,
}

impl<C, R, A, F, N> FnSpace<C, R, A, F, N>
where
    R: Fn(&C) -> bool,
    A: Fn(&C) -> bool,
    F: Fn(&C) -> Option<C>,
    N: Fn(&C) -> Option<C>,
{
    /// Creates a space from the four protocol functions.
    pub fn new(reject: R, accept: A, first_child: F, next_sibling: N) -> Self {
        Self {
            reject,
            accept,
            first_child,
            next_sibling,
            _phantom: PhantomData,
        }
    }
}

impl<C, R, A, F, N> Debug for FnSpace<C, R, A, F, N>
where
    R: Fn(&C) -> bool,
    A: Fn(&C) -> bool,
    F: Fn(&C) -> Option<C>,
    N: Fn(&C) -> Option<C>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpace")
            .field("candidate", &std::any::type_name::<C>())
            .finish()
    }
}

impl<C, R, A, F, N> SearchSpace for FnSpace<C, R, A, F, N>
where
    C: Debug,
    R: Fn(&C) -> bool,
    A: Fn(&C) -> bool,
    F: Fn(&C) -> Option<C>,
    N: Fn(&C) -> Option<C>,
{
    type Candidate = C;

    fn reject(&self, candidate: &C) -> bool {
        (self.reject)(candidate)
    }

    fn accept(&self, candidate: &C) -> bool {
        (self.accept)(candidate)
    }

    fn first_child(&self, candidate: &C) -> Option<C> {
        (self.first_child)(candidate)
    }

    fn next_sibling(&self, candidate: &C) -> Option<C> {
        (self.next_sibling)(candidate)
    }
}
