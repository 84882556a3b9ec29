//! Backtrack search engines
//!
//! This crate provides:
//! - Recursive, explicit-stack and breadth-first engines
//! - LIFO and FIFO frontiers
//! - Termination conditions
//! - Search scope and statistics
//! - Monotonicity verification for `reject`
//! - `Solver`, wiring a space to a configuration

pub mod engine;
pub mod frontier;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod termination;
pub mod verify;

pub use backtrack_config::{EnvironmentMode, ExplorationType, SearchConfig};
pub use engine::{
    search_queue, search_recursive, search_stack, search_with, QueueEngine, RecursiveEngine,
    SearchEngine, SearchOutcome, StackEngine, TerminationReason,
};
pub use frontier::{FifoFrontier, Frontier, FrontierEntry, LifoFrontier};
pub use scope::SearchScope;
pub use solver::Solver;
pub use stats::SearchStats;
pub use termination::{
    ConfiguredTermination, ExternalTermination, NoTermination, NodeCountTermination,
    OrTermination, SolutionCountTermination, Termination, TimeTermination,
};
pub use verify::MonotonicityCheck;
