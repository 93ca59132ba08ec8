//! Function dispatch and argument evaluation

mod count;
mod length;
mod regex_functions;
mod value;

use crate::ast::{FunctionArg, FunctionCall};
use crate::core_evaluator::engine::EvaluationContext;
use crate::core_evaluator::{EvalNode, Operand, TypedValue};
use crate::document::JsonNode;
use crate::error::JsonPathResult;
use crate::type_system::FunctionName;

use super::regex_cache::RegexUsage;

pub use count::count_nodes;
pub use length::length_of;
pub use value::single_value;

impl<N: JsonNode> EvaluationContext<'_, N> {
    /// Evaluate a built-in function call with `current` bound to `@`
    ///
    /// # Errors
    /// Propagates limit failures and regex safety rejections.
    pub fn evaluate_function<'q>(
        &mut self,
        call: &'q FunctionCall,
        current: &EvalNode<N>,
    ) -> JsonPathResult<TypedValue<'q, N>> {
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.evaluate_argument(arg, current)?);
        }
        let mut args = args.into_iter();
        let mut next_arg = || args.next().unwrap_or(TypedValue::Value(Operand::Nothing));

        Ok(match call.name {
            FunctionName::Length => TypedValue::Value(length_of(&as_value(next_arg()))),
            FunctionName::Count => TypedValue::Value(count_nodes(&as_nodes(next_arg()))),
            FunctionName::Value => TypedValue::Value(single_value(as_nodes(next_arg()))),
            FunctionName::Match | FunctionName::Search => {
                let usage = if call.name == FunctionName::Match {
                    RegexUsage::Match
                } else {
                    RegexUsage::Search
                };
                let input = as_value(next_arg());
                let pattern = as_value(next_arg());
                TypedValue::Logical(self.regex_test(usage, &input, &pattern)?)
            }
        })
    }

    fn evaluate_argument<'q>(
        &mut self,
        arg: &'q FunctionArg,
        current: &EvalNode<N>,
    ) -> JsonPathResult<TypedValue<'q, N>> {
        Ok(match arg {
            FunctionArg::Literal(literal) => TypedValue::Value(Operand::Literal(literal)),
            FunctionArg::SingularQuery(query) => TypedValue::Value(
                self.resolve_singular(query, current)?
                    .map_or(Operand::Nothing, Operand::Node),
            ),
            FunctionArg::Query(query) => TypedValue::Nodes(self.evaluate_query(query, current)?),
            FunctionArg::Function(call) => self.evaluate_function(call, current)?,
        })
    }
}

fn as_value<N>(arg: TypedValue<'_, N>) -> Operand<'_, N> {
    match arg {
        TypedValue::Value(operand) => operand,
        TypedValue::Logical(_) | TypedValue::Nodes(_) => Operand::Nothing,
    }
}

fn as_nodes<N>(arg: TypedValue<'_, N>) -> Vec<EvalNode<N>> {
    match arg {
        TypedValue::Nodes(nodes) => nodes,
        TypedValue::Value(_) | TypedValue::Logical(_) => Vec::new(),
    }
}
