//! Option defaults, builders and JSON loading

use nodepath_engine::config::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES_VISITED, DEFAULT_MAX_REGEX_INPUT_LENGTH,
    DEFAULT_MAX_REGEX_PATTERN_LENGTH,
};
use nodepath_engine::{ConfigurationError, QueryOptions, Validator};

#[test]
fn test_defaults() {
    let options = QueryOptions::default();
    assert_eq!(options.max_nodes_visited, DEFAULT_MAX_NODES_VISITED);
    assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(options.max_regex_pattern_length, DEFAULT_MAX_REGEX_PATTERN_LENGTH);
    assert_eq!(options.max_regex_input_length, DEFAULT_MAX_REGEX_INPUT_LENGTH);
    assert!(options.reject_unsafe_regex);
    assert!(!options.throw_on_error);
    assert!(options.validate().is_ok());
}

#[test]
fn test_builder_chain() {
    let options = QueryOptions::new()
        .with_max_nodes_visited(10)
        .with_max_depth(3)
        .with_max_regex_pattern_length(16)
        .with_max_regex_input_length(32)
        .with_reject_unsafe_regex(false)
        .with_throw_on_error(true);
    assert_eq!(options.max_nodes_visited, 10);
    assert_eq!(options.max_depth, 3);
    assert_eq!(options.max_regex_pattern_length, 16);
    assert_eq!(options.max_regex_input_length, 32);
    assert!(!options.reject_unsafe_regex);
    assert!(options.throw_on_error);
}

#[test]
fn test_from_json_keeps_defaults_for_missing_fields() {
    let options = QueryOptions::from_json(r#"{"maxDepth": 5, "throwOnError": true}"#)
        .expect("valid options");
    assert_eq!(options.max_depth, 5);
    assert!(options.throw_on_error);
    assert_eq!(options.max_nodes_visited, DEFAULT_MAX_NODES_VISITED);

    assert_eq!(
        QueryOptions::from_json("{}").expect("empty object"),
        QueryOptions::default()
    );
}

#[test]
fn test_from_json_rejects_bad_input() {
    assert!(matches!(
        QueryOptions::from_json(r#"{"maxDepht": 5}"#),
        Err(ConfigurationError::InvalidParameter(_))
    ));
    assert!(matches!(
        QueryOptions::from_json("[1, 2]"),
        Err(ConfigurationError::InvalidParameter(_))
    ));
    assert!(matches!(
        QueryOptions::from_json(r#"{"maxNodesVisited": -1}"#),
        Err(ConfigurationError::InvalidParameter(_))
    ));
}

#[test]
fn test_zero_budgets_are_invalid() {
    let error = QueryOptions::default()
        .with_max_nodes_visited(0)
        .validate()
        .expect_err("zero budget");
    assert!(matches!(error, ConfigurationError::InvalidLimit(_)));
    assert!(error.to_string().contains("maxNodesVisited"));

    assert!(matches!(
        QueryOptions::from_json(r#"{"maxRegexInputLength": 0}"#),
        Err(ConfigurationError::InvalidLimit(_))
    ));
}
