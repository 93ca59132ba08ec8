//! Selector evaluation tests
//!
//! Name, wildcard, index, slice and descendant semantics against
//! `serde_json` documents, including result order and duplicates.

use nodepath_engine::{CoreJsonPathEvaluator, JsonPathParser, QueryOptions};
use serde_json::{Value, json};

fn values(query: &str, document: &Value) -> Vec<Value> {
    let ast = JsonPathParser::compile(query).expect("query should parse");
    CoreJsonPathEvaluator::evaluate(&ast, document, &QueryOptions::default())
        .expect("evaluation should succeed")
        .into_iter()
        .map(|node| node.into_value().clone())
        .collect()
}

fn paths(query: &str, document: &Value) -> Vec<String> {
    let ast = JsonPathParser::compile(query).expect("query should parse");
    CoreJsonPathEvaluator::evaluate(&ast, document, &QueryOptions::default())
        .expect("evaluation should succeed")
        .iter()
        .map(|node| node.path().to_string())
        .collect()
}

#[test]
fn test_root_selects_document() {
    let doc = json!({"a": 1});
    assert_eq!(values("$", &doc), vec![doc.clone()]);
    assert_eq!(paths("$", &doc), vec!["$"]);
}

#[test]
fn test_name_selector_is_exact() {
    let doc = json!({"a": 1, "A": 2, "a ": 3, "": 4});
    assert_eq!(values("$.a", &doc), vec![json!(1)]);
    assert_eq!(values("$['A']", &doc), vec![json!(2)]);
    assert_eq!(values("$['a ']", &doc), vec![json!(3)]);
    assert_eq!(values("$['']", &doc), vec![json!(4)]);
    assert!(values("$.b", &doc).is_empty());
    assert!(values("$.a.b", &doc).is_empty());
}

#[test]
fn test_name_selector_ignores_arrays() {
    let doc = json!([{"0": "x"}]);
    assert!(values("$['0']", &doc).is_empty());
}

#[test]
fn test_wildcard() {
    let doc = json!({"o": {"b": 2, "a": 1}, "arr": [3, 4], "s": "str"});
    assert_eq!(values("$.o.*", &doc), vec![json!(2), json!(1)]);
    assert_eq!(values("$.arr[*]", &doc), vec![json!(3), json!(4)]);
    assert!(values("$.s.*", &doc).is_empty());
}

#[test]
fn test_index_selector() {
    let doc = json!(["a", "b", "c"]);
    assert_eq!(values("$[0]", &doc), vec![json!("a")]);
    assert_eq!(values("$[-1]", &doc), vec![json!("c")]);
    assert_eq!(values("$[-3]", &doc), vec![json!("a")]);
    assert!(values("$[3]", &doc).is_empty());
    assert!(values("$[-4]", &doc).is_empty());
    assert_eq!(paths("$[-1]", &doc), vec!["$[2]"]);
}

#[test]
fn test_index_on_object_selects_nothing() {
    assert!(values("$[0]", &json!({"0": 1})).is_empty());
}

#[test]
fn test_slices() {
    let doc = json!([0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(values("$[1:3]", &doc), vec![json!(1), json!(2)]);
    assert_eq!(values("$[5:]", &doc), vec![json!(5), json!(6)]);
    assert_eq!(values("$[:2]", &doc), vec![json!(0), json!(1)]);
    assert_eq!(values("$[::3]", &doc), vec![json!(0), json!(3), json!(6)]);
    assert_eq!(values("$[-2:]", &doc), vec![json!(5), json!(6)]);
    assert_eq!(
        values("$[::-2]", &doc),
        vec![json!(6), json!(4), json!(2), json!(0)]
    );
    assert_eq!(values("$[3:0:-1]", &doc), vec![json!(3), json!(2), json!(1)]);
    assert!(values("$[::0]", &doc).is_empty());
    assert!(values("$[10:]", &doc).is_empty());
    assert_eq!(paths("$[5:]", &doc), vec!["$[5]", "$[6]"]);
}

#[test]
fn test_selector_lists_keep_duplicates_and_order() {
    let doc = json!(["a", "b", "c"]);
    assert_eq!(
        values("$[0, 2, 0, -1]", &doc),
        vec![json!("a"), json!("c"), json!("a"), json!("c")]
    );
    assert_eq!(
        values("$[1:, 0]", &doc),
        vec![json!("b"), json!("c"), json!("a")]
    );
    assert_eq!(values("$[*, *]", &doc).len(), 6);
}

#[test]
fn test_descendant_order_is_pre_order() {
    let doc = json!({
        "a": {"k": 1, "b": {"k": 2}},
        "c": [{"k": 3}, {"k": 4}],
        "k": 0
    });
    assert_eq!(
        values("$..k", &doc),
        vec![json!(0), json!(1), json!(2), json!(3), json!(4)]
    );
    assert_eq!(
        paths("$..k", &doc),
        vec![
            "$['k']",
            "$['a']['k']",
            "$['a']['b']['k']",
            "$['c'][0]['k']",
            "$['c'][1]['k']"
        ]
    );
}

#[test]
fn test_descendant_wildcard_and_index() {
    let doc = json!({"a": [1, [2, 3]]});
    assert_eq!(
        values("$..*", &doc),
        vec![json!([1, [2, 3]]), json!(1), json!([2, 3]), json!(2), json!(3)]
    );
    assert_eq!(values("$..[0]", &doc), vec![json!(1), json!(2)]);
}

#[test]
fn test_descendant_includes_starting_node() {
    let doc = json!({"a": {"a": 1}});
    assert_eq!(values("$.a..a", &doc), vec![json!(1)]);
    assert_eq!(values("$..a", &doc), vec![json!({"a": 1}), json!(1)]);
}

#[test]
fn test_member_names_with_special_characters() {
    let doc = json!({"it's": 1, "back\\slash": 2, "new\nline": 3, "ünï": 4});
    assert_eq!(values("$['it\\'s']", &doc), vec![json!(1)]);
    assert_eq!(values(r#"$["back\\slash"]"#, &doc), vec![json!(2)]);
    assert_eq!(values("$['new\\nline']", &doc), vec![json!(3)]);
    assert_eq!(values("$.ünï", &doc), vec![json!(4)]);
    assert_eq!(paths("$.*", &doc)[0], "$['it\\'s']");
    assert_eq!(paths("$.*", &doc)[2], "$['new\\nline']");
}
