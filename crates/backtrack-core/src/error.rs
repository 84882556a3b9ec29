//! Error types for backtracking search

use thiserror::Error;

/// Main error type for backtrack operations
#[derive(Debug, Error)]
pub enum BacktrackError {
    /// Error in search configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A search space was built from invalid parameters
    #[error("Invalid search space: {0}")]
    InvalidSpace(String),

    /// `reject` pruned a candidate but let one of its children through.
    ///
    /// Only reported when the monotonicity verification pass is enabled.
    #[error("reject is not monotone: {rejected} was rejected but its child {descendant} was not")]
    NonMonotoneReject {
        /// Debug rendering of the rejected candidate.
        rejected: String,
        /// Debug rendering of the child that escaped rejection.
        descendant: String,
    },
}

/// Result type alias for backtrack operations
pub type Result<T> = std::result::Result<T, BacktrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_monotone_message_names_both_candidates() {
        let err = BacktrackError::NonMonotoneReject {
            rejected: "\"ab\"".to_string(),
            descendant: "\"aba\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"ab\""));
        assert!(msg.contains("\"aba\""));
    }

    #[test]
    fn test_config_message() {
        let err = BacktrackError::Config("bad limit".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad limit");
    }
}
