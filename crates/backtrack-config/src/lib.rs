//! Configuration system for backtrack.
//!
//! Load search configuration from TOML or YAML files to pick the traversal
//! strategy, termination limits, and assertion level without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use backtrack_config::{ExplorationType, SearchConfig};
//! use std::time::Duration;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     exploration_type = "breadth_first"
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     solution_count_limit = 10
//! "#).unwrap();
//!
//! assert_eq!(config.exploration_type, ExplorationType::BreadthFirst);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use backtrack_config::SearchConfig;
//!
//! let config = SearchConfig::load("backtrack.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Environment mode controlling debug-only verification.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Traversal strategy.
    #[serde(default)]
    pub exploration_type: ExplorationType,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or sets
    /// a limit to zero.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects limits that would stop the search before it visits anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(termination) = &self.termination else {
            return Ok(());
        };
        if termination.node_count_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "node_count_limit must be greater than zero".to_string(),
            ));
        }
        if termination.total_seconds().is_none() {
            return Err(ConfigError::Invalid(
                "time limit overflows u64 seconds".to_string(),
            ));
        }
        if termination.solution_count_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "solution_count_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the traversal strategy.
    pub fn with_exploration_type(mut self, exploration_type: ExplorationType) -> Self {
        self.exploration_type = exploration_type;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Stops the search after `limit` visited candidates.
    pub fn with_node_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Stops the search after `limit` accepted candidates.
    pub fn with_solution_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            solution_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Environment mode affecting how much the search checks its collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Trust the search space contract; no extra work.
    #[default]
    Production,

    /// Verify that `reject` is monotone by probing one level below every
    /// rejected candidate.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if collaborator checks are enabled.
    pub fn is_asserted(&self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Traversal strategy for the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationType {
    /// Call-stack recursion, pre-order.
    #[default]
    Recursive,

    /// Explicit stack, same order as `Recursive`.
    DepthFirst,

    /// Explicit queue, level order. Memory grows with the tree's width.
    BreadthFirst,
}

impl fmt::Display for ExplorationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorationType::Recursive => write!(f, "Recursive"),
            ExplorationType::DepthFirst => write!(f, "DepthFirst"),
            ExplorationType::BreadthFirst => write!(f, "BreadthFirst"),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend searching.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum number of visited candidates.
    pub node_count_limit: Option<u64>,

    /// Maximum number of accepted candidates.
    pub solution_count_limit: Option<u64>,
}

impl TerminationConfig {
    fn total_seconds(&self) -> Option<u64> {
        self.minutes_spent_limit
            .unwrap_or(0)
            .checked_mul(60)?
            .checked_add(self.seconds_spent_limit.unwrap_or(0))
    }

    /// Returns the time limit as a Duration, if any.
    ///
    /// Saturates at `u64::MAX` seconds; [`SearchConfig::validate`] rejects
    /// limits that overflow.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds = self.total_seconds().unwrap_or(u64::MAX);
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
