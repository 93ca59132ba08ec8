//! Execution limiter
//!
//! Single checkpoint for the node-visit budget and nesting depth. Traversal,
//! filter sub-queries and structural equality all report here; the first breach
//! aborts the evaluation with a `LimitExceeded` error.

use crate::config::QueryOptions;
use crate::error::{JsonPathResult, LimitKind, limit_exceeded_error};

/// Budget tracker for one evaluation
#[derive(Debug)]
pub struct ExecutionLimiter {
    max_nodes_visited: usize,
    max_depth: usize,
    visited: usize,
    depth: usize,
}

impl ExecutionLimiter {
    #[must_use]
    pub fn new(options: &QueryOptions) -> Self {
        Self {
            max_nodes_visited: options.max_nodes_visited,
            max_depth: options.max_depth,
            visited: 0,
            depth: 0,
        }
    }

    /// Count one unit of work
    ///
    /// # Errors
    /// Fails once the count passes `max_nodes_visited`.
    #[inline]
    pub fn visit(&mut self) -> JsonPathResult<()> {
        self.visited += 1;
        if self.visited > self.max_nodes_visited {
            tracing::debug!(
                target: "nodepath::evaluator",
                limit = self.max_nodes_visited,
                "node visit budget exhausted"
            );
            return Err(limit_exceeded_error(
                LimitKind::NodesVisited,
                format!("visited more than {} nodes", self.max_nodes_visited),
            ));
        }
        Ok(())
    }

    /// Enter a filter selector; each nested filter level counts once
    ///
    /// # Errors
    /// Fails when nesting passes `max_depth`.
    pub fn enter(&mut self) -> JsonPathResult<()> {
        self.depth += 1;
        self.check_depth(0)
    }

    #[inline]
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Check a traversal or comparison depth on top of the current nesting
    ///
    /// # Errors
    /// Fails when the combined depth passes `max_depth`.
    pub fn check_depth(&self, relative: usize) -> JsonPathResult<()> {
        let depth = self.depth + relative;
        if depth > self.max_depth {
            tracing::debug!(
                target: "nodepath::evaluator",
                depth,
                limit = self.max_depth,
                "depth limit exceeded"
            );
            return Err(limit_exceeded_error(
                LimitKind::Depth,
                format!("nesting depth {depth} exceeds maximum of {}", self.max_depth),
            ));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn visited(&self) -> usize {
        self.visited
    }
}
