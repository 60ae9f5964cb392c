//! `+ - * / **` and their compound-assign forms (spec §4.5).
//!
//! Called after the evaluator's numeric normalization, so `a` and `b` always
//! share a tag of Int or Float.

use crate::ast::Loc;
use crate::errors::EvalError;
use crate::value::V;

pub fn math(op: &str, a: V, b: V, loc: Loc) -> Result<V, EvalError> {
    let op = op.strip_suffix('=').unwrap_or(op);

    match (a, b) {
        (V::Int(a), V::Int(b)) => match op {
            "+" => Ok(V::Int(a.wrapping_add(b))),
            "-" => Ok(V::Int(a.wrapping_sub(b))),
            "*" => Ok(V::Int(a.wrapping_mul(b))),
            "/" => {
                if b == 0 {
                    Err(EvalError::division_by_zero(loc))
                } else if a.wrapping_rem(b) == 0 {
                    Ok(V::Int(a.wrapping_div(b)))
                } else {
                    Ok(V::Float(a as f64 / b as f64))
                }
            }
            "**" => Ok(V::Float((a as f64).powf(b as f64))),
            _ => Err(EvalError::unsupported_operator(op, loc)),
        },
        (V::Float(a), V::Float(b)) => match op {
            "+" => Ok(V::Float(a + b)),
            "-" => Ok(V::Float(a - b)),
            "*" => Ok(V::Float(a * b)),
            "/" => Ok(V::Float(a / b)),
            "**" => Ok(V::Float(a.powf(b))),
            _ => Err(EvalError::unsupported_operator(op, loc)),
        },
        _ => unreachable!("evaluator numeric normalization guarantees a shared Int/Float tag"),
    }
}
