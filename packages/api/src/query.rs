//! Single-shot entry points

use nodepath_engine::{
    CoreJsonPathEvaluator, JsonNode, JsonPathError, JsonPathParser, JsonPathResult, Query,
    QueryOptions,
};

use crate::compiled::CompiledQuery;
use crate::node::NodeWithPath;

/// Parse a query, keeping the syntax error
///
/// # Errors
/// Returns `JsonPathError::InvalidExpression` with the character position of the
/// first problem.
pub fn try_parse(query: &str) -> JsonPathResult<Query> {
    JsonPathParser::compile(query)
}

/// Parse a query; `None` on any syntax error
#[must_use]
pub fn parse(query: &str) -> Option<Query> {
    try_parse(query)
        .inspect_err(|error| log::debug!("query rejected: {error}"))
        .ok()
}

/// Whether `query` is syntactically valid
#[must_use]
pub fn is_valid(query: &str) -> bool {
    JsonPathParser::validate(query).is_ok()
}

/// Parse once for repeated evaluation; `None` on any syntax error
#[must_use]
pub fn compile(query: &str) -> Option<CompiledQuery> {
    CompiledQuery::new(query)
        .inspect_err(|error| log::debug!("query rejected: {error}"))
        .ok()
}

/// Evaluate `query` against `document`, returning the selected values in order
///
/// `Ok(None)` means the query did not parse or a budget was exhausted.
///
/// # Errors
/// Only when `options.throw_on_error` is set: the syntax or limit error instead
/// of `Ok(None)`.
pub fn query_values<N: JsonNode>(
    query: &str,
    document: N,
    options: &QueryOptions,
) -> JsonPathResult<Option<Vec<N>>> {
    let Some(ast) = parse_for(query, options)? else {
        return Ok(None);
    };
    Ok(evaluate(&ast, document, options)?
        .map(|nodes| nodes.into_iter().map(|node| node.value).collect()))
}

/// Like [`query_values`], pairing each value with its normalized path
///
/// # Errors
/// Only when `options.throw_on_error` is set.
pub fn query_nodes<N: JsonNode>(
    query: &str,
    document: N,
    options: &QueryOptions,
) -> JsonPathResult<Option<Vec<NodeWithPath<N>>>> {
    let Some(ast) = parse_for(query, options)? else {
        return Ok(None);
    };
    evaluate(&ast, document, options)
}

fn parse_for(query: &str, options: &QueryOptions) -> JsonPathResult<Option<Query>> {
    settle(try_parse(query), options)
}

/// Evaluate a parsed query under the error policy in `options`
pub(crate) fn evaluate<N: JsonNode>(
    ast: &Query,
    document: N,
    options: &QueryOptions,
) -> JsonPathResult<Option<Vec<NodeWithPath<N>>>> {
    let nodes = CoreJsonPathEvaluator::evaluate(ast, document, options)
        .map(|nodes| nodes.into_iter().map(NodeWithPath::from).collect());
    settle(nodes, options)
}

/// Map a failure to `None` unless the caller asked for errors
fn settle<T>(
    result: Result<T, JsonPathError>,
    options: &QueryOptions,
) -> JsonPathResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if options.throw_on_error => Err(error),
        Err(error) => {
            log::debug!("query failed, returning no result: {error}");
            Ok(None)
        }
    }
}
