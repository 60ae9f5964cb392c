//! Bitwise, shift, modulo and unary-complement operators (spec §4.6).
//!
//! `and`/`xor`/`ro` are routed here by the operator table but have no arm
//! below — they surface `UnsupportedOperator`, matching the source's
//! unfinished state (spec §9 open question 1).

use crate::ast::Loc;
use crate::errors::EvalError;
use crate::settings::EvalSettings;
use crate::value::V;

/// Shift counts are masked into 0..=63 when `settings.mask_shift_counts` is
/// set, resolving spec §9 open question 4.
const SHIFT_MASK: i64 = 63;

pub fn math_logic(op: &str, a: V, b: V, loc: Loc, settings: EvalSettings) -> Result<V, EvalError> {
    let op = op.strip_suffix('=').unwrap_or(op);

    let (a, b) = match (a, b) {
        (V::Int(a), V::Int(b)) => (a, b),
        (V::Float(a), V::Float(b)) => (a as i64, b as i64),
        _ => unreachable!("evaluator numeric normalization guarantees a shared Int/Float tag"),
    };

    match op {
        "|" => Ok(V::Int(a | b)),
        "^" => Ok(V::Int(a ^ b)),
        "&" => Ok(V::Int(a & b)),
        "%" => {
            if b == 0 {
                Err(EvalError::division_by_zero(loc))
            } else {
                Ok(V::Int(a % b))
            }
        }
        "~" => Ok(V::Int(!b)),
        "<<" => shift(a, b, op, loc, settings, i64::wrapping_shl),
        ">>" => shift(a, b, op, loc, settings, i64::wrapping_shr),
        "and" | "xor" | "ro" => Err(EvalError::unsupported_operator(op, loc)),
        _ => Err(EvalError::unsupported_operator(op, loc)),
    }
}

/// With masking enabled, an out-of-range count is folded into 0..=63 before
/// shifting. With masking disabled, an out-of-range count is a defined
/// `UnsupportedOperator` rather than the native-shift panic a raw `<<`/`>>`
/// on `i64` would otherwise produce.
fn shift(
    a: i64,
    count: i64,
    op: &str,
    loc: Loc,
    settings: EvalSettings,
    f: fn(i64, u32) -> i64,
) -> Result<V, EvalError> {
    if settings.mask_shift_counts {
        return Ok(V::Int(f(a, (count & SHIFT_MASK) as u32)));
    }
    if (0..64).contains(&count) {
        Ok(V::Int(f(a, count as u32)))
    } else {
        Err(EvalError::unsupported_operator(op, loc))
    }
}
