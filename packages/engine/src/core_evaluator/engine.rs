//! Evaluation entry point and per-call context

use crate::ast::{Query, RootIdentifier};
use crate::config::QueryOptions;
use crate::document::JsonNode;
use crate::error::JsonPathResult;
use crate::functions::RegexCache;

use super::limits::ExecutionLimiter;
use super::node::EvalNode;

/// Tree-walking evaluator over any [`JsonNode`] document
pub struct CoreJsonPathEvaluator;

impl CoreJsonPathEvaluator {
    /// Evaluate a compiled query, returning the nodelist in document order
    ///
    /// # Errors
    /// Returns `JsonPathError::LimitExceeded` when a budget is breached or a
    /// regex is rejected by the safety policy. No partial nodelist is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use nodepath_engine::{CoreJsonPathEvaluator, JsonPathParser, QueryOptions};
    /// use serde_json::json;
    ///
    /// let doc = json!({"a": [1, 2, 3]});
    /// let query = JsonPathParser::compile("$.a[-1]").unwrap();
    /// let nodes = CoreJsonPathEvaluator::evaluate(&query, &doc, &QueryOptions::default()).unwrap();
    /// assert_eq!(nodes[0].path().to_string(), "$['a'][2]");
    /// ```
    pub fn evaluate<N: JsonNode>(
        query: &Query,
        document: N,
        options: &QueryOptions,
    ) -> JsonPathResult<Vec<EvalNode<N>>> {
        let root = EvalNode::root(document);
        let mut context = EvaluationContext::new(root.clone(), options);
        let result = context.evaluate_query(query, &root);

        match &result {
            Ok(nodes) => tracing::trace!(
                target: "nodepath::evaluator",
                results = nodes.len(),
                visited = context.limiter.visited(),
                "evaluation complete"
            ),
            Err(error) => tracing::debug!(
                target: "nodepath::evaluator",
                %error,
                visited = context.limiter.visited(),
                "evaluation aborted"
            ),
        }
        result
    }
}

/// Mutable state owned by one evaluation call
pub struct EvaluationContext<'o, N> {
    pub(crate) root: EvalNode<N>,
    pub(crate) options: &'o QueryOptions,
    pub(crate) limiter: ExecutionLimiter,
    pub(crate) regex_cache: RegexCache,
}

impl<'o, N: JsonNode> EvaluationContext<'o, N> {
    #[must_use]
    pub fn new(root: EvalNode<N>, options: &'o QueryOptions) -> Self {
        Self {
            root,
            options,
            limiter: ExecutionLimiter::new(options),
            regex_cache: RegexCache::new(),
        }
    }

    /// Evaluate a query from the document root (`$`) or from `current` (`@`)
    ///
    /// # Errors
    /// Propagates limit and regex policy failures.
    pub fn evaluate_query(
        &mut self,
        query: &Query,
        current: &EvalNode<N>,
    ) -> JsonPathResult<Vec<EvalNode<N>>> {
        let start = match query.root {
            RootIdentifier::Root => self.root.clone(),
            RootIdentifier::Current => current.clone(),
        };
        self.limiter.visit()?;

        let mut nodes = vec![start];
        for segment in &query.segments {
            if nodes.is_empty() {
                break;
            }
            nodes = self.apply_segment(segment, &nodes)?;
        }
        Ok(nodes)
    }
}
