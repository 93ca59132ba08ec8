//! Child and descendant segment application

use hashbrown::HashSet;

use crate::ast::{Segment, Selector};
use crate::document::JsonNode;
use crate::error::JsonPathResult;

use super::engine::EvaluationContext;
use super::node::EvalNode;

/// Work item of the descendant traversal
enum Frame<N> {
    /// Visit a node at the given depth below the traversal start
    Enter(EvalNode<N>, usize),
    /// Close a container once all of its descendants are done
    Exit(usize),
}

impl<N: JsonNode> EvaluationContext<'_, N> {
    /// Apply one segment to every node of the input nodelist
    ///
    /// # Errors
    /// Propagates limit and regex policy failures.
    pub fn apply_segment(
        &mut self,
        segment: &Segment,
        input: &[EvalNode<N>],
    ) -> JsonPathResult<Vec<EvalNode<N>>> {
        let mut output = Vec::new();
        match segment {
            Segment::Child { selectors } => {
                for node in input {
                    for selector in selectors {
                        self.apply_selector(selector, node, &mut output)?;
                    }
                }
            }
            Segment::Descendant { selectors } => {
                for node in input {
                    self.apply_descendant(selectors, node, &mut output)?;
                }
            }
        }
        Ok(output)
    }

    /// Pre-order traversal of `start` and everything below it
    ///
    /// Containers already open on the current path are skipped, so cyclic
    /// documents terminate while shared (non-cyclic) subtrees are still visited
    /// once per path.
    fn apply_descendant(
        &mut self,
        selectors: &[Selector],
        start: &EvalNode<N>,
        output: &mut Vec<EvalNode<N>>,
    ) -> JsonPathResult<()> {
        let mut open: HashSet<usize> = HashSet::new();
        let mut stack = vec![Frame::Enter(start.clone(), 0)];

        while let Some(frame) = stack.pop() {
            let (node, depth) = match frame {
                Frame::Exit(identity) => {
                    open.remove(&identity);
                    continue;
                }
                Frame::Enter(node, depth) => (node, depth),
            };

            self.limiter.visit()?;
            let identity = node.value().identity();
            if identity.is_some_and(|id| open.contains(&id)) {
                tracing::trace!(target: "nodepath::evaluator", path = %node.path(), "cycle skipped");
                continue;
            }
            self.limiter.check_depth(depth)?;

            for selector in selectors {
                self.apply_selector(selector, &node, output)?;
            }

            let Some(identity) = identity else {
                continue;
            };
            let children = node.value().children();
            if children.is_empty() {
                continue;
            }
            open.insert(identity);
            stack.push(Frame::Exit(identity));
            for (element, child) in children.into_iter().rev() {
                stack.push(Frame::Enter(node.child(element, child), depth + 1));
            }
        }

        Ok(())
    }
}
