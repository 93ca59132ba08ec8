//! Filter selector

use crate::ast::LogicalExpr;
use crate::document::JsonNode;
use crate::error::JsonPathResult;

use crate::core_evaluator::engine::EvaluationContext;
use crate::core_evaluator::node::EvalNode;

impl<N: JsonNode> EvaluationContext<'_, N> {
    /// Keep the children of `node` for which `expression` holds
    pub(super) fn apply_filter(
        &mut self,
        expression: &LogicalExpr,
        node: &EvalNode<N>,
        output: &mut Vec<EvalNode<N>>,
    ) -> JsonPathResult<()> {
        let children = node.value().children();
        if children.is_empty() {
            return Ok(());
        }

        self.limiter.enter()?;
        for (element, child) in children {
            self.limiter.visit()?;
            let candidate = node.child(element, child);
            if self.evaluate_logical(expression, &candidate)? {
                output.push(candidate);
            }
        }
        self.limiter.exit();
        Ok(())
    }
}
