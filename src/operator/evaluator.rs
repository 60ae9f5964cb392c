//! The dispatch engine (spec §4.3): computes operands, pre-coerces them,
//! invokes the per-family routine, and writes back when the operator
//! demands it.

use crate::ast::{Loc, Runnable, Writable};
use crate::context::Ctx;
use crate::errors::EvalError;
use crate::operator::families;
use crate::operator::node::OperatorNode;
use crate::operator::table::Family;
use crate::settings::EvalSettings;
use crate::value::{Tag, V};
use std::fmt;

impl Runnable for OperatorNode {
    fn run(&self, ctx: &mut dyn Ctx) -> Result<V, EvalError> {
        self.run_with_child_eval(ctx, eval_plain)
    }

    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "(")?;
        if let Some(left) = &self.left {
            left.dump(out)?;
        }
        write!(out, "{}", self.op)?;
        if let Some(right) = &self.right {
            right.dump(out)?;
        }
        write!(out, ")")
    }

    fn loc(&self) -> Loc {
        self.loc
    }
}

type EvalChild = fn(&dyn Runnable, &mut dyn Ctx) -> Result<V, EvalError>;

fn eval_plain(node: &dyn Runnable, ctx: &mut dyn Ctx) -> Result<V, EvalError> {
    node.run(ctx)
}

impl OperatorNode {
    /// The contract shared by [`Runnable::run`] and
    /// [`run_short_circuit`]: the two differ only in how a child Runnable is
    /// evaluated (plain recursion vs. the short-circuit walker), never in
    /// the coercion/dispatch/write-back steps themselves.
    fn run_with_child_eval(
        &self,
        ctx: &mut dyn Ctx,
        eval_child: EvalChild,
    ) -> Result<V, EvalError> {
        let details = self.details;

        if ctx.is_cancelled() {
            return Err(EvalError::cancelled(self.loc));
        }
        let a = if details.skip_a {
            V::Null
        } else if let Some(left) = &self.left {
            eval_child(left.as_ref(), ctx)?
        } else {
            V::Null
        };

        if ctx.is_cancelled() {
            return Err(EvalError::cancelled(self.loc));
        }
        let b = if let Some(right) = &self.right {
            eval_child(right.as_ref(), ctx)?
        } else {
            V::Null
        };

        let (a, b) = if details.numeric {
            normalize_numeric(a, b)
        } else {
            (a, b)
        };

        let res = dispatch(details.family, &self.op, a, b, self.loc, ctx.settings())?;

        if details.write {
            let left = self
                .left
                .as_ref()
                .ok_or_else(|| EvalError::not_assignable(&self.dump_string(), self.loc))?;
            let writable = left
                .as_writable()
                .ok_or_else(|| EvalError::not_assignable(&left.dump_string(), self.loc))?;
            writable.write(ctx, res.clone())?;
            return Ok(res);
        }

        Ok(res)
    }
}

fn normalize_numeric(a: V, b: V) -> (V, V) {
    let a = a.as_numeric();
    let b = b.as_numeric();
    if a.tag() == Tag::Float || b.tag() == Tag::Float {
        (a.as_tag(Tag::Float), b.as_tag(Tag::Float))
    } else {
        (a.as_tag(Tag::Int), b.as_tag(Tag::Int))
    }
}

fn dispatch(
    family: Family,
    op: &str,
    a: V,
    b: V,
    loc: Loc,
    settings: EvalSettings,
) -> Result<V, EvalError> {
    match family {
        Family::None => Ok(b),
        Family::Append => Ok(families::append(a, b)),
        Family::Math => families::math(op, a, b, loc),
        Family::MathLogic => families::math_logic(op, a, b, loc, settings),
        Family::Compare => families::compare(op, a, b, loc),
        Family::Not => Ok(families::not(b)),
        Family::BoolLogic => families::bool_logic(op, a, b, loc),
    }
}

/// Alternate evaluation entry point lifting short-circuit evaluation up to
/// the evaluator for `&&`, `||` and `??`, per spec §9 open question 5 / the
/// REDESIGN guidance in §4.7. `Evaluator::run` (the default, `Runnable::run`)
/// evaluates both sides of every operator eagerly, matching the source's
/// actual (fidelity-gapped) behavior; this entry point instead skips the
/// right child entirely when the left side already determines the result.
pub struct Evaluator;

impl Evaluator {
    pub fn run(node: &dyn Runnable, ctx: &mut dyn Ctx) -> Result<V, EvalError> {
        node.run(ctx)
    }

    pub fn run_short_circuit(node: &dyn Runnable, ctx: &mut dyn Ctx) -> Result<V, EvalError> {
        run_short_circuit(node, ctx)
    }
}

fn run_short_circuit(node: &dyn Runnable, ctx: &mut dyn Ctx) -> Result<V, EvalError> {
    let Some(opnode) = node.as_any().downcast_ref::<OperatorNode>() else {
        return node.run(ctx);
    };

    match opnode.op.as_str() {
        "&&" | "||" | "??" => short_circuit_logical(opnode, ctx),
        _ => opnode.run_with_child_eval(ctx, run_short_circuit),
    }
}

fn short_circuit_logical(node: &OperatorNode, ctx: &mut dyn Ctx) -> Result<V, EvalError> {
    if ctx.is_cancelled() {
        return Err(EvalError::cancelled(node.loc));
    }

    let left = node
        .left
        .as_ref()
        .expect("&&, || and ?? are always built with a left operand");
    let a = run_short_circuit(left.as_ref(), ctx)?;

    match node.op.as_str() {
        "&&" => {
            if !a.as_bool() {
                return Ok(V::Bool(false));
            }
            let right = node
                .right
                .as_ref()
                .expect("&& is always built with a right operand");
            let b = run_short_circuit(right.as_ref(), ctx)?;
            Ok(V::Bool(b.as_bool()))
        }
        "||" => {
            if a.as_bool() {
                return Ok(V::Bool(true));
            }
            let right = node
                .right
                .as_ref()
                .expect("|| is always built with a right operand");
            let b = run_short_circuit(right.as_ref(), ctx)?;
            Ok(V::Bool(b.as_bool()))
        }
        "??" => {
            if !matches!(a, V::Null) {
                return Ok(a);
            }
            let right = node
                .right
                .as_ref()
                .expect("?? is always built with a right operand");
            run_short_circuit(right.as_ref(), ctx)
        }
        _ => unreachable!("matched only on \"&&\" | \"||\" | \"??\" above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Literal, Variable};
    use crate::context::MemoryCtx;
    use crate::operator::node::Builder;

    fn lit(v: V) -> Box<dyn Runnable> {
        Box::new(Literal::new(v, Loc::default()))
    }

    #[test]
    fn precedence_scenario_one_plus_two_times_three() {
        let plus = Builder::build("+", Some(lit(V::Int(1))), lit(V::Int(2)), Loc::default())
            .unwrap();
        let root = Builder::build("*", Some(plus), lit(V::Int(3)), Loc::default()).unwrap();
        let mut ctx = MemoryCtx::new();
        assert_eq!(root.run(&mut ctx).unwrap(), V::Int(7));
    }

    #[test]
    fn write_then_read_round_trips() {
        let var = Box::new(Variable::new("x", Loc::default()));
        let assign =
            Builder::build("=", Some(var), lit(V::Int(42)), Loc::default()).unwrap();
        let mut ctx = MemoryCtx::new();
        let result = assign.run(&mut ctx).unwrap();
        assert_eq!(result, V::Int(42));
        assert_eq!(ctx.read_var("x"), V::Int(42));
    }

    #[test]
    fn non_writable_left_errors() {
        let not_writable =
            Builder::build("!", None, lit(V::Bool(true)), Loc::default()).unwrap();
        let assign =
            Builder::build("=", Some(not_writable), lit(V::Int(1)), Loc::default()).unwrap();
        let mut ctx = MemoryCtx::new();
        let err = assign.run(&mut ctx).unwrap_err();
        assert_eq!(err.kind, crate::errors::EvalErrorKind::NotAssignable);
    }

    #[test]
    fn null_coalescing_default_entry_point_is_eager() {
        // Default `run` evaluates both sides of `??` and returns `b`
        // unconditionally (spec §9 open question 2).
        let node = Builder::build(
            "??",
            Some(lit(V::Int(5))),
            lit(V::Int(9)),
            Loc::default(),
        )
        .unwrap();
        let mut ctx = MemoryCtx::new();
        assert_eq!(node.run(&mut ctx).unwrap(), V::Int(9));
    }

    #[test]
    fn null_coalescing_short_circuit_prefers_non_null_left() {
        let node = Builder::build(
            "??",
            Some(lit(V::Int(5))),
            lit(V::Int(9)),
            Loc::default(),
        )
        .unwrap();
        let mut ctx = MemoryCtx::new();
        assert_eq!(
            Evaluator::run_short_circuit(node.as_ref(), &mut ctx).unwrap(),
            V::Int(5)
        );
    }

    #[test]
    fn and_short_circuit_skips_right_side() {
        // x is unset; reading it would be fine either way (Null), but the
        // point is the right side, a write, must never execute.
        let write_marker = Box::new(Variable::new("ran", Loc::default()));
        let mark =
            Builder::build("=", Some(write_marker), lit(V::Int(1)), Loc::default()).unwrap();
        let node = Builder::build("&&", Some(lit(V::Bool(false))), mark, Loc::default())
            .unwrap();
        let mut ctx = MemoryCtx::new();
        let result = Evaluator::run_short_circuit(node.as_ref(), &mut ctx).unwrap();
        assert_eq!(result, V::Bool(false));
        assert_eq!(ctx.read_var("ran"), V::Null);
    }

    #[test]
    fn dump_always_parenthesizes() {
        let node = Builder::build("+", Some(lit(V::Int(1))), lit(V::Int(2)), Loc::default())
            .unwrap();
        assert_eq!(node.dump_string(), "(1+2)");
    }
}
