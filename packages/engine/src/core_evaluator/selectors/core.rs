//! Selector dispatch plus name and wildcard selectors

use crate::ast::Selector;
use crate::document::{JsonNode, NodeKind};
use crate::error::JsonPathResult;
use crate::normalized_paths::PathElement;

use crate::core_evaluator::engine::EvaluationContext;
use crate::core_evaluator::node::EvalNode;

impl<N: JsonNode> EvaluationContext<'_, N> {
    /// Append the matches of `selector` applied to `node`
    ///
    /// # Errors
    /// Propagates limit and regex policy failures.
    pub fn apply_selector(
        &mut self,
        selector: &Selector,
        node: &EvalNode<N>,
        output: &mut Vec<EvalNode<N>>,
    ) -> JsonPathResult<()> {
        match selector {
            Selector::Name { name } => {
                if node.value().kind() != NodeKind::Object {
                    return Ok(());
                }
                if let Some(member) = node.value().member(name) {
                    self.limiter.visit()?;
                    output.push(node.child(PathElement::Name(name.clone()), member));
                }
                Ok(())
            }
            Selector::Wildcard => {
                for (element, child) in node.value().children() {
                    self.limiter.visit()?;
                    output.push(node.child(element, child));
                }
                Ok(())
            }
            Selector::Index { index } => self.apply_index(*index, node, output),
            Selector::Slice { start, end, step } => {
                self.apply_slice(*start, *end, *step, node, output)
            }
            Selector::Filter { expression } => self.apply_filter(expression, node, output),
        }
    }
}
