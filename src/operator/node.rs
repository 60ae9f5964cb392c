//! The operator AST node and the Builder that constructs it (spec §4.2).

use crate::ast::{Loc, Runnable};
use crate::errors::EvalError;
use crate::operator::table::{self, OperatorDetails};
use crate::value::V;
use std::fmt;

/// A binary (or unary-on-right) operator node. Immutable once built; owns
/// its children exclusively.
pub struct OperatorNode {
    pub(crate) op: String,
    pub(crate) details: &'static OperatorDetails,
    pub(crate) left: Option<Box<dyn Runnable>>,
    pub(crate) right: Option<Box<dyn Runnable>>,
    pub(crate) loc: Loc,
}

impl fmt::Debug for OperatorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorNode")
            .field("op", &self.op)
            .field("loc", &self.loc)
            .finish()
    }
}

/// Constructs operator nodes, rebalancing by precedence so that tree shape
/// alone encodes associativity (spec §4.2).
pub struct Builder;

impl Builder {
    /// Builds a node for `op` over `a` (optional: absent for a unary
    /// right-only operator like `!`) and `b`.
    ///
    /// If `a` is itself an `OperatorNode` whose priority is strictly smaller
    /// than `op`'s, `a`'s right child is replaced in place by a fresh
    /// `(op, a.right, b)` node and `a` is returned as the new root. Equal
    /// priorities never rotate — left-associative. This is O(1): it touches
    /// only `a`'s own right-child slot, never walks the existing tree.
    pub fn build(
        op: &str,
        a: Option<Box<dyn Runnable>>,
        b: Box<dyn Runnable>,
        loc: Loc,
    ) -> Result<Box<dyn Runnable>, EvalError> {
        let details = table::lookup(op).ok_or_else(|| EvalError::invalid_operator(op, loc))?;

        if let Some(mut a) = a {
            let rotate = a
                .as_any()
                .downcast_ref::<OperatorNode>()
                .map(|rop| details.priority < rop.details.priority)
                .unwrap_or(false);

            if rotate {
                let rop = a
                    .as_any_mut()
                    .downcast_mut::<OperatorNode>()
                    .expect("rotate flag only set when downcast succeeds");
                let carried_right = rop
                    .right
                    .take()
                    .expect("an operator node being rotated under must have a right child");
                rop.right = Some(Box::new(OperatorNode {
                    op: op.to_string(),
                    details,
                    left: Some(carried_right),
                    right: Some(b),
                    loc,
                }));
                return Ok(a);
            }

            return Ok(Box::new(OperatorNode {
                op: op.to_string(),
                details,
                left: Some(a),
                right: Some(b),
                loc,
            }));
        }

        Ok(Box::new(OperatorNode {
            op: op.to_string(),
            details,
            left: None,
            right: Some(b),
            loc,
        }))
    }
}

impl OperatorNode {
    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn details(&self) -> &'static OperatorDetails {
        self.details
    }
}
