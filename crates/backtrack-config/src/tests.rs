//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "full_assert"
        exploration_type = "depth_first"

        [termination]
        seconds_spent_limit = 30
        node_count_limit = 1000000
        solution_count_limit = 10
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.exploration_type, ExplorationType::DepthFirst);
    let termination = config.termination.unwrap();
    assert_eq!(termination.seconds_spent_limit, Some(30));
    assert_eq!(termination.node_count_limit, Some(1_000_000));
    assert_eq!(termination.solution_count_limit, Some(10));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: full_assert
        exploration_type: breadth_first
        termination:
          minutes_spent_limit: 2
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.exploration_type, ExplorationType::BreadthFirst);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(120)));
}

#[test]
fn test_empty_toml_is_default() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Production);
    assert_eq!(config.exploration_type, ExplorationType::Recursive);
    assert!(config.termination.is_none());
    assert!(config.time_limit().is_none());
}

#[test]
fn test_unknown_exploration_type_rejected() {
    let err = SearchConfig::from_toml_str(r#"exploration_type = "best_first""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "got {err:?}");
}

#[test]
fn test_zero_limits_rejected() {
    let err = SearchConfig::from_toml_str(
        r#"
        [termination]
        solution_count_limit = 0
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");

    let err = SearchConfig::from_yaml_str("termination:\n  node_count_limit: 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
}

#[test]
fn test_overflowing_time_limit_rejected() {
    let err = SearchConfig::from_toml_str(
        r#"
        [termination]
        minutes_spent_limit = 400000000000000000
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");

    let termination = TerminationConfig {
        seconds_spent_limit: Some(u64::MAX),
        minutes_spent_limit: Some(1),
        ..TerminationConfig::default()
    };
    assert_eq!(
        termination.time_limit(),
        Some(Duration::from_secs(u64::MAX))
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SearchConfig::load("/nonexistent/backtrack.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_exploration_type(ExplorationType::BreadthFirst)
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_termination_seconds(60)
        .with_node_count_limit(500)
        .with_solution_count_limit(3);

    assert_eq!(config.exploration_type, ExplorationType::BreadthFirst);
    assert!(config.environment_mode.is_asserted());
    let termination = config.termination.unwrap();
    assert_eq!(termination.seconds_spent_limit, Some(60));
    assert_eq!(termination.node_count_limit, Some(500));
    assert_eq!(termination.solution_count_limit, Some(3));
}

#[test]
fn test_exploration_type_display() {
    assert_eq!(format!("{}", ExplorationType::Recursive), "Recursive");
    assert_eq!(format!("{}", ExplorationType::DepthFirst), "DepthFirst");
    assert_eq!(format!("{}", ExplorationType::BreadthFirst), "BreadthFirst");
}
