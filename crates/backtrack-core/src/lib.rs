//! Backtrack Core - protocol types for backtracking search
//!
//! This crate provides the abstractions every search engine is written against:
//! - [`SearchSpace`]: the implicit tree and its pruning predicates
//! - [`FnSpace`]: a `SearchSpace` assembled from four closures
//! - [`SolutionSink`]: where accepted candidates are delivered
//! - [`BacktrackError`]: the error type shared by the workspace

pub mod error;
pub mod sink;
pub mod space;

pub use error::{BacktrackError, Result};
pub use sink::{CountingSink, SolutionSink};
pub use space::{FnSpace, SearchSpace, SiblingChain};
