//! Index and slice selectors

use crate::document::{JsonNode, NodeKind};
use crate::error::JsonPathResult;
use crate::normalized_paths::PathElement;

use crate::core_evaluator::engine::EvaluationContext;
use crate::core_evaluator::node::EvalNode;

/// Resolve a possibly negative index against an array length
#[must_use]
pub fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let position = if index < 0 { len.checked_add(index)? } else { index };
    if (0..len).contains(&position) {
        usize::try_from(position).ok()
    } else {
        None
    }
}

/// Element positions selected by `[start:end:step]`, in selection order
///
/// A zero step selects nothing. Defaults depend on the step sign: ascending
/// slices run from 0 to `len`, descending ones from `len - 1` down past index 0.
#[must_use]
pub fn slice_indices(
    len: usize,
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
) -> Vec<usize> {
    let step = step.unwrap_or(1);
    let Ok(len) = i64::try_from(len) else {
        return Vec::new();
    };
    if step == 0 || len == 0 {
        return Vec::new();
    }

    let normalize = |i: i64| if i >= 0 { i } else { len + i };
    let mut selected = Vec::new();

    if step > 0 {
        let lower = normalize(start.unwrap_or(0)).clamp(0, len);
        let upper = normalize(end.unwrap_or(len)).clamp(0, len);
        let mut i = lower;
        while i < upper {
            selected.extend(usize::try_from(i).ok());
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    } else {
        let upper = normalize(start.unwrap_or(len - 1)).clamp(-1, len - 1);
        let lower = end.map_or(-1, normalize).clamp(-1, len - 1);
        let mut i = upper;
        while lower < i {
            selected.extend(usize::try_from(i).ok());
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    }

    selected
}

impl<N: JsonNode> EvaluationContext<'_, N> {
    pub(super) fn apply_index(
        &mut self,
        index: i64,
        node: &EvalNode<N>,
        output: &mut Vec<EvalNode<N>>,
    ) -> JsonPathResult<()> {
        if node.value().kind() != NodeKind::Array {
            return Ok(());
        }
        let element = normalize_index(index, node.value().len())
            .and_then(|position| Some((position, node.value().element(position)?)));
        if let Some((position, value)) = element {
            self.limiter.visit()?;
            output.push(node.child(PathElement::Index(position), value));
        }
        Ok(())
    }

    pub(super) fn apply_slice(
        &mut self,
        start: Option<i64>,
        end: Option<i64>,
        step: Option<i64>,
        node: &EvalNode<N>,
        output: &mut Vec<EvalNode<N>>,
    ) -> JsonPathResult<()> {
        if node.value().kind() != NodeKind::Array {
            return Ok(());
        }
        for position in slice_indices(node.value().len(), start, end, step) {
            if let Some(value) = node.value().element(position) {
                self.limiter.visit()?;
                output.push(node.child(PathElement::Index(position), value));
            }
        }
        Ok(())
    }
}
