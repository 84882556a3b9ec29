//! Shared test fixtures for backtrack crates.
//!
//! - [`tree`] - Binary tree spaces with optional pruning
//! - [`instrumented`] - Call-counting and never-reject decorators
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! backtrack-test = { workspace = true }
//! ```

pub mod instrumented;
pub mod tree;

pub use instrumented::{CallCounts, Instrumented, Unpruned};
pub use tree::BinaryTree;
