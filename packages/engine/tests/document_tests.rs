//! Document model tests
//!
//! `SharedValue` construction and conversion, and evaluation over
//! self-referential documents.

use nodepath_engine::{
    CoreJsonPathEvaluator, JsonNode, JsonPathParser, LimitKind, NodeKind, QueryOptions,
    SharedValue,
};
use serde_json::json;

fn evaluate(
    query: &str,
    document: &SharedValue,
    options: &QueryOptions,
) -> nodepath_engine::JsonPathResult<Vec<(SharedValue, String)>> {
    let ast = JsonPathParser::compile(query).expect("query should parse");
    Ok(CoreJsonPathEvaluator::evaluate(&ast, document.clone(), options)?
        .into_iter()
        .map(|node| {
            let (value, path) = node.into_parts();
            (value, path.to_string())
        })
        .collect())
}

/// `{"name": "root", "child": {"name": "child", "parent": <root>}, "self": <root>}`
fn cyclic_document() -> SharedValue {
    let root = SharedValue::object();
    let child = SharedValue::object();
    root.insert("name", SharedValue::from("root"));
    child.insert("name", SharedValue::from("child"));
    child.insert("parent", root.clone());
    root.insert("child", child);
    root.insert("self", root.clone());
    root
}

#[test]
fn test_json_round_trip() {
    let source = json!({"a": [1, 2.5, "x", null, true], "b": {}});
    let shared = SharedValue::from(&source);
    assert_eq!(shared.kind(), NodeKind::Object);
    assert_eq!(shared.len(), 2);
    assert_eq!(shared.to_json(), Some(source));
}

#[test]
fn test_builders() {
    let list = SharedValue::array();
    assert!(list.push(SharedValue::from(1_i64)));
    assert!(list.push(SharedValue::null()));
    assert!(!list.insert("k", SharedValue::null()));

    let object = SharedValue::object();
    assert!(object.insert("k", SharedValue::from(1_i64)));
    assert!(object.insert("k", SharedValue::from(2_i64)));
    assert!(!object.push(SharedValue::null()));

    assert_eq!(list.to_json(), Some(json!([1, null])));
    assert_eq!(object.to_json(), Some(json!({"k": 2})));
}

#[test]
fn test_cyclic_document_refuses_json_conversion() {
    let root = cyclic_document();
    assert!(root.to_json().is_none());
    assert!(format!("{root:?}").contains("cyclic"));
}

#[test]
fn test_descendant_query_terminates_on_cycles() {
    let root = cyclic_document();
    let results = evaluate("$..name", &root, &QueryOptions::default()).expect("finite result");
    let found: Vec<_> = results
        .iter()
        .map(|(value, path)| (value.as_str().map(str::to_owned), path.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (Some("root".to_string()), "$['name']"),
            (Some("child".to_string()), "$['child']['name']"),
        ]
    );
}

#[test]
fn test_descendant_wildcard_on_cycles_stays_within_budget() {
    let root = cyclic_document();
    let options = QueryOptions::default().with_max_nodes_visited(200);
    let results = evaluate("$..*", &root, &options).expect("bounded");
    assert!(results.iter().all(|(_, path)| path.matches('[').count() <= 3));
}

#[test]
fn test_shared_subtrees_are_visited_per_path() {
    let leaf = SharedValue::object();
    leaf.insert("v", SharedValue::from(1_i64));
    let root = SharedValue::object();
    root.insert("a", leaf.clone());
    root.insert("b", leaf);

    let results = evaluate("$..v", &root, &QueryOptions::default()).expect("evaluate");
    let paths: Vec<_> = results.into_iter().map(|(_, path)| path).collect();
    assert_eq!(paths, vec!["$['a']['v']", "$['b']['v']"]);
}

#[test]
fn test_equality_between_cyclic_values_terminates() {
    let left = SharedValue::array();
    left.push(left.clone());
    let right = SharedValue::array();
    right.push(right.clone());

    let doc = SharedValue::object();
    doc.insert("l", left);
    doc.insert("r", right);

    let results = evaluate("$[?@ == $.r]", &doc, &QueryOptions::default()).expect("terminates");
    assert_eq!(results.len(), 2);
}

#[test]
fn test_deep_descent_hits_depth_limit() {
    let mut nested = json!(1);
    for _ in 0..20 {
        nested = json!({ "n": nested });
    }
    let doc = SharedValue::from(nested);

    let shallow = QueryOptions::default().with_max_depth(10);
    let error = evaluate("$..n", &doc, &shallow).expect_err("too deep");
    assert_eq!(error.limit(), Some(LimitKind::Depth));

    assert_eq!(
        evaluate("$..n", &doc, &QueryOptions::default()).expect("within default").len(),
        20
    );
}

#[test]
fn test_node_budget_aborts_without_partial_results() {
    let items: Vec<i32> = (0..50).collect();
    let doc = SharedValue::from(json!({ "items": items }));
    let options = QueryOptions::default().with_max_nodes_visited(10);
    let error = evaluate("$.items[*]", &doc, &options).expect_err("budget");
    assert!(error.is_limit_exceeded());
    assert_eq!(error.limit(), Some(LimitKind::NodesVisited));
}

#[test]
fn test_shared_handles_compare_by_identity() {
    let leaf = SharedValue::from("x");
    let root = SharedValue::object();
    root.insert("a", leaf.clone());
    root.insert("b", leaf.clone());
    root.insert("c", SharedValue::from("x"));

    let a = root.member("a").expect("a");
    assert!(a.ptr_eq(&leaf));
    assert!(a.ptr_eq(&root.member("b").expect("b")));
    assert!(!a.ptr_eq(&root.member("c").expect("c")));
}

#[test]
fn test_debug_output() {
    let doc = SharedValue::from(json!({"a": [1, "two", null], "b": {"c": true}}));
    assert_eq!(
        format!("{doc:?}"),
        r#"SharedValue({"a":[1,"two",null],"b":{"c":true}})"#
    );

    let looped = SharedValue::array();
    looped.push(SharedValue::from(1_i64));
    looped.push(looped.clone());
    assert_eq!(format!("{looped:?}"), "SharedValue([1,<cyclic>])");
}

fn deep_shared(depth: usize) -> SharedValue {
    let mut current = SharedValue::from(0_i64);
    for _ in 0..depth {
        let next = SharedValue::array();
        next.push(current);
        current = next;
    }
    current
}

#[test]
fn test_very_deep_documents_format_and_drop() {
    let depth = 100_000;
    let doc = deep_shared(depth);
    let rendered = format!("{doc:?}");
    assert_eq!(rendered.len(), "SharedValue()".len() + 2 * depth + 1);
    assert!(rendered.starts_with("SharedValue([[["));
    drop(doc);
}

#[test]
fn test_deep_json_conversion_both_ways() {
    let depth = 2_000;
    let mut nested = json!(0);
    for _ in 0..depth {
        nested = json!([nested]);
    }
    let shared = SharedValue::from(&nested);
    assert_eq!(shared.to_json(), Some(nested));
    assert_eq!(deep_shared(depth).to_json(), shared.to_json());
}
