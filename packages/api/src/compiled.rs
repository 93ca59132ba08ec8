//! Parse-once, evaluate-many query handle

use std::fmt;
use std::sync::Arc;

use nodepath_engine::{JsonNode, JsonPathParser, JsonPathResult, Query, QueryOptions};

use crate::node::NodeWithPath;
use crate::query::evaluate;

/// Compiled query plus the options it evaluates with
///
/// The AST is immutable and shared, so a `CompiledQuery` is cheap to clone and
/// can be used from several threads at once.
///
/// ```
/// use nodepath::compile;
/// use serde_json::json;
///
/// let authors = compile("$..author").unwrap();
/// let doc = json!({"book": [{"author": "A"}, {"author": "B"}]});
/// let found = authors.query_values(&doc).unwrap().unwrap();
/// assert_eq!(found, vec![&json!("A"), &json!("B")]);
/// ```
#[derive(Clone)]
pub struct CompiledQuery {
    source: Arc<str>,
    ast: Arc<Query>,
    options: QueryOptions,
}

impl CompiledQuery {
    /// Compile `query` with default options
    ///
    /// # Errors
    /// Returns `JsonPathError::InvalidExpression` for syntax errors.
    pub fn new(query: &str) -> JsonPathResult<Self> {
        let ast = JsonPathParser::compile(query)?;
        Ok(Self {
            source: Arc::from(query),
            ast: Arc::new(ast),
            options: QueryOptions::default(),
        })
    }

    /// Same query, evaluated with `options`
    #[must_use]
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Query text this handle was compiled from
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn ast(&self) -> &Query {
        &self.ast
    }

    /// Evaluate against `document`; `Ok(None)` when a budget is exhausted
    ///
    /// # Errors
    /// Only when the options set `throw_on_error`.
    pub fn query_values<N: JsonNode>(&self, document: N) -> JsonPathResult<Option<Vec<N>>> {
        Ok(self
            .query_nodes(document)?
            .map(|nodes| nodes.into_iter().map(|node| node.value).collect()))
    }

    /// Evaluate against `document`, keeping each result's normalized path
    ///
    /// # Errors
    /// Only when the options set `throw_on_error`.
    pub fn query_nodes<N: JsonNode>(
        &self,
        document: N,
    ) -> JsonPathResult<Option<Vec<NodeWithPath<N>>>> {
        evaluate(&self.ast, document, &self.options)
    }
}

impl fmt::Debug for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledQuery")
            .field("query", &self.source)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
