//! `&&` and `||` (spec §4.7).
//!
//! Both operands have already been evaluated by the time this routine runs,
//! so short-circuiting here is not observable as effect suppression — see
//! [`crate::operator::evaluator::run_short_circuit`] for the entry point
//! that lifts short-circuit evaluation up to the evaluator itself.

use crate::ast::Loc;
use crate::errors::EvalError;
use crate::value::V;

pub fn bool_logic(op: &str, a: V, b: V, loc: Loc) -> Result<V, EvalError> {
    match op {
        "&&" => Ok(V::Bool(a.as_bool() && b.as_bool())),
        "||" => Ok(V::Bool(a.as_bool() || b.as_bool())),
        _ => Err(EvalError::unsupported_operator(op, loc)),
    }
}
