//! Command-line arguments.

use std::path::PathBuf;

use backtrack_config::ExplorationType;
use clap::{Parser, ValueEnum};

/// Enumerate password-shaped strings by backtracking search.
#[derive(Debug, Parser)]
#[command(name = "backtrack", version)]
#[command(about = "Enumerate password-shaped strings by backtracking search")]
pub struct Args {
    /// Traversal strategy; overrides the configuration file.
    #[arg(short, long, value_enum)]
    pub engine: Option<Engine>,

    /// Search configuration (TOML). Defaults to ./backtrack.toml if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Password rules (TOML). Defaults to the reference rules.
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Allowed characters, in sibling order.
    #[arg(long)]
    pub alphabet: Option<String>,

    /// Shortest accepted password.
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Longest generated password.
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Stop after this many solutions.
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Print only the number of solutions.
    #[arg(long)]
    pub count: bool,

    /// Verify that reject is monotone while searching.
    #[arg(long)]
    pub full_assert: bool,

    /// Log every solution.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable console logging.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Traversal strategy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Call-stack recursion
    Recursive,
    /// Explicit stack, same order as recursion
    DepthFirst,
    /// Explicit queue, level order
    BreadthFirst,
}

impl From<Engine> for ExplorationType {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Recursive => ExplorationType::Recursive,
            Engine::DepthFirst => ExplorationType::DepthFirst,
            Engine::BreadthFirst => ExplorationType::BreadthFirst,
        }
    }
}
