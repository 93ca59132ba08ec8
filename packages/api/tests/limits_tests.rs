//! Budgets, regex safety and the error policy

use nodepath::{
    JsonPathError, LimitKind, QueryOptions, SharedValue, compile, query_values,
};
use serde_json::{Value, json};

fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

fn wide_document() -> Value {
    let items: Vec<Value> = (0..100).map(|i| json!({ "id": i })).collect();
    json!({ "items": items })
}

#[test]
fn test_node_budget_yields_none_by_default() {
    init_logging();
    let doc = wide_document();
    let options = QueryOptions::default().with_max_nodes_visited(20);
    let result = query_values("$..id", &doc, &options).expect("errors are mapped");
    assert!(result.is_none());
}

#[test]
fn test_node_budget_surfaces_error_when_requested() {
    let doc = wide_document();
    let options = QueryOptions::default()
        .with_max_nodes_visited(20)
        .with_throw_on_error(true);
    let error = query_values("$..id", &doc, &options).expect_err("limit error");
    assert!(error.is_limit_exceeded());
    assert_eq!(error.limit(), Some(LimitKind::NodesVisited));
}

#[test]
fn test_syntax_error_policy() {
    init_logging();
    let doc = json!({});
    assert_eq!(
        query_values("$.store[", &doc, &QueryOptions::default()).expect("mapped"),
        None
    );

    let strict = QueryOptions::default().with_throw_on_error(true);
    let error = query_values("$.store[", &doc, &strict).expect_err("syntax error");
    assert!(error.is_syntax_error());
    assert!(error.position().is_some());
    assert!(matches!(error, JsonPathError::InvalidExpression { .. }));
}

#[test]
fn test_depth_limit() {
    let mut nested = json!("leaf");
    for _ in 0..30 {
        nested = json!([nested]);
    }
    let shallow = QueryOptions::default().with_max_depth(8);
    assert_eq!(query_values("$..*", &nested, &shallow).expect("mapped"), None);

    let deep = query_values("$..*", &nested, &QueryOptions::default())
        .expect("mapped")
        .expect("within default depth");
    assert_eq!(deep.len(), 30);
}

#[test]
fn test_unsafe_regex_rejected_by_default() {
    init_logging();
    let doc = json!(["aaa", "b"]);
    let query = "$[?match(@, '(a+)+')]";

    assert_eq!(
        query_values(query, &doc, &QueryOptions::default()).expect("mapped"),
        None
    );

    let strict = QueryOptions::default().with_throw_on_error(true);
    let error = query_values(query, &doc, &strict).expect_err("unsafe pattern");
    assert_eq!(error.limit(), Some(LimitKind::UnsafeRegex));

    let permissive = QueryOptions::default().with_reject_unsafe_regex(false);
    let matched = query_values(query, &doc, &permissive)
        .expect("no error")
        .expect("evaluated");
    assert_eq!(matched, vec![&json!("aaa")]);
}

#[test]
fn test_regex_length_limits() {
    let doc = json!(["x"]);
    let long_pattern = "x".repeat(300);
    let query = format!("$[?search(@, '{long_pattern}')]");
    let strict = QueryOptions::default().with_throw_on_error(true);
    let error = query_values(&query, &doc, &strict).expect_err("pattern too long");
    assert_eq!(error.limit(), Some(LimitKind::RegexPatternLength));

    let long_input = json!(["y".repeat(2_000)]);
    let error = query_values("$[?search(@, 'y')]", &long_input, &strict)
        .expect_err("input too long");
    assert_eq!(error.limit(), Some(LimitKind::RegexInputLength));
}

#[test]
fn test_compiled_query_carries_its_options() {
    let doc = wide_document();
    let query = compile("$.items[*].id").expect("valid");
    assert_eq!(query.query_values(&doc).expect("no error").map(|v| v.len()), Some(100));

    let tight = query
        .clone()
        .with_options(QueryOptions::default().with_max_nodes_visited(10));
    assert_eq!(tight.query_values(&doc).expect("mapped"), None);
    assert_eq!(tight.options().max_nodes_visited, 10);
}

#[test]
fn test_cyclic_documents_terminate() {
    init_logging();
    let root = SharedValue::object();
    let child = SharedValue::object();
    child.insert("name", SharedValue::from("child"));
    child.insert("up", root.clone());
    root.insert("name", SharedValue::from("root"));
    root.insert("down", child);

    let names = query_values("$..name", root.clone(), &QueryOptions::default())
        .expect("no error")
        .expect("finite");
    let names: Vec<_> = names.iter().filter_map(|n| n.to_json()).collect();
    assert_eq!(names, vec![json!("root"), json!("child")]);

    let everything = query_values("$..*", root, &QueryOptions::default())
        .expect("no error")
        .expect("finite");
    assert!(everything.len() < 10);
}
