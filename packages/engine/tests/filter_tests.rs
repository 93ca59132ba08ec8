//! Filter expression evaluation tests
//!
//! Comparisons, existence tests, logical operators, `Nothing` semantics and
//! structural equality.

use nodepath_engine::{
    CoreJsonPathEvaluator, JsonPathParser, JsonPathResult, LimitKind, QueryOptions,
};
use serde_json::{Value, json};

fn values(query: &str, document: &Value) -> Vec<Value> {
    let ast = JsonPathParser::compile(query).expect("query should parse");
    CoreJsonPathEvaluator::evaluate(&ast, document, &QueryOptions::default())
        .expect("evaluation should succeed")
        .into_iter()
        .map(|node| node.into_value().clone())
        .collect()
}

fn inventory() -> Value {
    json!([
        {"name": "apple", "price": 3, "tags": ["fruit"], "stock": null},
        {"name": "pear", "price": 5.5, "tags": ["fruit", "green"]},
        {"name": "kale", "price": "n/a", "tags": []},
        {"name": "plum", "price": 3.0}
    ])
}

fn names(query: &str) -> Vec<Value> {
    values(query, &inventory())
        .into_iter()
        .map(|item| item["name"].clone())
        .collect()
}

#[test]
fn test_numeric_comparisons() {
    assert_eq!(names("$[?@.price == 3]"), vec![json!("apple"), json!("plum")]);
    assert_eq!(names("$[?@.price > 3]"), vec![json!("pear")]);
    assert_eq!(names("$[?@.price <= 3]"), vec![json!("apple"), json!("plum")]);
    assert_eq!(names("$[?@.price >= 5.5]"), vec![json!("pear")]);
}

#[test]
fn test_ordering_across_types_is_false() {
    assert!(names("$[?@.price < 'a']").is_empty());
    assert_eq!(names("$[?@.price < 'z']"), vec![json!("kale")]);
    assert_eq!(names("$[?@.price > 'a']"), vec![json!("kale")]);
}

#[test]
fn test_string_ordering_is_by_code_point() {
    assert_eq!(names("$[?@.name < 'k']"), vec![json!("apple")]);
    assert_eq!(
        values("$[?@ > 'Z']", &json!(["a", "B", "é", "Z"])),
        vec![json!("a"), json!("é")]
    );
}

#[test]
fn test_existence_tests() {
    assert_eq!(names("$[?@.stock]"), vec![json!("apple")]);
    assert_eq!(
        names("$[?!@.stock]"),
        vec![json!("pear"), json!("kale"), json!("plum")]
    );
    assert_eq!(names("$[?@.tags[1]]"), vec![json!("pear")]);
}

#[test]
fn test_missing_member_is_nothing_not_null() {
    assert_eq!(names("$[?@.stock == null]"), vec![json!("apple")]);
    assert!(names("$[?@.missing == @.other]").is_empty());
    assert!(names("$[?@.missing != 1]").is_empty());
}

#[test]
fn test_null_ordering_is_false() {
    assert!(names("$[?@.stock <= null]").is_empty());
    assert!(names("$[?@.stock < 1]").is_empty());
}

#[test]
fn test_logical_operators() {
    assert_eq!(
        names("$[?@.price == 3 && @.tags]"),
        vec![json!("apple")]
    );
    assert_eq!(
        names("$[?@.price > 5 || @.name == 'kale']"),
        vec![json!("pear"), json!("kale")]
    );
    assert_eq!(
        names("$[?!(@.price == 3 || @.price == 'n/a')]"),
        vec![json!("pear")]
    );
}

#[test]
fn test_structural_equality() {
    let doc = json!({
        "target": {"a": [1, {"b": 2}], "c": null},
        "items": [
            {"v": {"c": null, "a": [1, {"b": 2}]}},
            {"v": {"a": [1, {"b": 3}], "c": null}},
            {"v": {"a": [1, {"b": 2}]}},
            {"v": [1, {"b": 2}]}
        ]
    });
    assert_eq!(
        values("$.items[?@.v == $.target]", &doc),
        vec![json!({"v": {"c": null, "a": [1, {"b": 2}]}})]
    );
    assert_eq!(values("$.items[?@.v != $.target]", &doc).len(), 3);
    assert_eq!(values("$.items[?@.v == $.target.a]", &doc).len(), 1);
}

#[test]
fn test_literal_comparisons() {
    let doc = json!([1]);
    assert_eq!(values("$[?1 == 1.0]", &doc).len(), 1);
    assert_eq!(values("$[?'a' == 'a']", &doc).len(), 1);
    assert_eq!(values("$[?true != false]", &doc).len(), 1);
    assert!(values("$[?null == false]", &doc).is_empty());
    assert!(values("$[?1 == '1']", &doc).is_empty());
}

#[test]
fn test_filter_on_object_members() {
    let doc = json!({"x": {"n": 1}, "y": {"n": 2}, "z": 3});
    assert_eq!(values("$[?@.n > 1]", &doc), vec![json!({"n": 2})]);
    assert!(values("$.z[?@ == 3]", &doc).is_empty());
}

#[test]
fn test_root_reference_inside_filter() {
    let doc = json!({"limit": 4, "items": [3, 4, 5]});
    assert_eq!(values("$.items[?@ >= $.limit]", &doc), vec![json!(4), json!(5)]);
}

#[test]
fn test_nested_filters() {
    let doc = json!([
        {"rows": [{"ok": true}, {"ok": false}]},
        {"rows": [{"ok": false}]},
        {"rows": []}
    ]);
    assert_eq!(
        values("$[?@.rows[?@.ok == true]]", &doc),
        vec![json!({"rows": [{"ok": true}, {"ok": false}]})]
    );
}

#[test]
fn test_current_node_scalar_comparison() {
    let doc = json!([1, "1", null, [1], {"a": 1}]);
    assert_eq!(values("$[?@ == 1]", &doc), vec![json!(1)]);
    assert_eq!(values("$[?@ == null]", &doc), vec![json!(null)]);
}

fn evaluate_with(query: &str, document: &Value, options: &QueryOptions) -> JsonPathResult<usize> {
    let ast = JsonPathParser::compile(query).expect("query should parse");
    CoreJsonPathEvaluator::evaluate(&ast, document, options).map(|nodes| nodes.len())
}

fn nested_arrays(depth: usize) -> Value {
    let mut nested = json!(1);
    for _ in 0..depth {
        nested = json!([nested]);
    }
    nested
}

#[test]
fn test_nested_filters_count_against_max_depth() {
    let doc = nested_arrays(12);
    let options = QueryOptions::default().with_max_depth(8);
    let nested_filters =
        |levels: usize| format!("${}{}", "[?@".repeat(levels), "]".repeat(levels));

    assert_eq!(evaluate_with(&nested_filters(8), &doc, &options).expect("within depth"), 1);

    let error = evaluate_with(&nested_filters(9), &doc, &options).expect_err("too deep");
    assert_eq!(error.limit(), Some(LimitKind::Depth));
}

#[test]
fn test_structural_equality_counts_against_max_depth() {
    let doc = nested_arrays(100);
    let error = evaluate_with("$[?@ == @]", &doc, &QueryOptions::default())
        .expect_err("equality too deep");
    assert_eq!(error.limit(), Some(LimitKind::Depth));

    let shallow = nested_arrays(20);
    assert_eq!(
        evaluate_with("$[?@ == @]", &shallow, &QueryOptions::default()).expect("within depth"),
        1
    );
}
