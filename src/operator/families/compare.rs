//! The compare family (spec §4.9): loose comparison with a four-stage type
//! classification, and strict comparison that bypasses all of it.

use crate::ast::Loc;
use crate::errors::EvalError;
use crate::value::{Tag, V};

pub fn compare(op: &str, a: V, b: V, loc: Loc) -> Result<V, EvalError> {
    match op {
        "===" | "!==" => Ok(compare_strict(op, &a, &b)),
        "<=>" => Err(EvalError::unsupported_operator(op, loc)),
        _ => compare_loose(op, a, b, loc),
    }
}

/// Bypasses all coercion: differing tags are simply unequal; Null equals
/// Null; equal-tag payloads compare by literal equality (spec §4.9).
pub fn compare_strict(op: &str, a: &V, b: &V) -> V {
    let eq = if a.tag() != b.tag() {
        false
    } else {
        match (a, b) {
            (V::Null, V::Null) => true,
            (V::Bool(a), V::Bool(b)) => a == b,
            (V::Int(a), V::Int(b)) => a == b,
            (V::Float(a), V::Float(b)) => a == b,
            (V::String(a), V::String(b)) => a == b,
            _ => unreachable!("tags matched above, so variants match too"),
        }
    };
    V::Bool(if op == "!==" { !eq } else { eq })
}

/// `<>` is a textual alias for `!=`; normalized before the staged dispatch
/// below since the loose-comparison group explicitly includes it (spec
/// §4.9) even though it has no distinct reduction of its own.
fn normalize(op: &str) -> &str {
    if op == "<>" { "!=" } else { op }
}

fn compare_loose(op: &str, a: V, b: V, loc: Loc) -> Result<V, EvalError> {
    let op = normalize(op);

    // Stage 3 (checked ahead of Stage 2): either side is Bool — a Bool
    // operand disqualifies numeric promotion entirely, matching
    // `operatorCompare`'s `if a.GetType()==ZtBool || b.GetType()==ZtBool`
    // block, which only runs once no string/number numeric was produced.
    // Without this ordering, `true == 2` would wrongly enter Stage 2 and
    // compare `1 == 2` instead of the required `1 == 1` (spec §8 scenario 7).
    if a.tag() == Tag::Bool || b.tag() == Tag::Bool {
        let ab = a.as_bool() as i64;
        let bb = b.as_bool() as i64;
        return int_compare(op, ab, bb, loc);
    }

    // Stage 1: per-side numeric classification.
    let ia = numeric_candidate(&a);
    let ib = numeric_candidate(&b);

    if ia.is_some() || ib.is_some() {
        // Stage 2: either side produced a numeric — force the other numeric
        // too, unify (Float wins), compare arithmetically.
        let ia = ia.unwrap_or_else(|| a.as_numeric());
        let ib = ib.unwrap_or_else(|| b.as_numeric());
        let (ia, ib) = unify_numeric(ia, ib);
        return numeric_compare(op, ia, ib, loc);
    }

    // Stage 4: tags differ => false (!= => true); else compare by value.
    if a.tag() != b.tag() {
        return Ok(V::Bool(op == "!="));
    }

    match (a, b) {
        (V::String(a), V::String(b)) => string_compare(op, &a, &b, loc),
        _ => Err(EvalError::unsupported_operator(op, loc)),
    }
}

/// Stage 1 per-side classification: Int/Float pass through; a String is
/// classified via `looks_int`/`is_numeric`; anything else is left aside.
fn numeric_candidate(v: &V) -> Option<V> {
    match v {
        V::Int(_) | V::Float(_) => Some(v.clone()),
        V::String(s) => {
            if crate::value::looks_int(s) {
                Some(v.as_tag(Tag::Int))
            } else if crate::value::is_numeric(s) {
                Some(v.as_tag(Tag::Float))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn unify_numeric(a: V, b: V) -> (V, V) {
    if a.tag() == Tag::Float || b.tag() == Tag::Float {
        (a.as_tag(Tag::Float), b.as_tag(Tag::Float))
    } else {
        (a, b)
    }
}

fn numeric_compare(op: &str, a: V, b: V, loc: Loc) -> Result<V, EvalError> {
    match (a, b) {
        (V::Int(a), V::Int(b)) => int_compare(op, a, b, loc),
        (V::Float(a), V::Float(b)) => match op {
            "<" => Ok(V::Bool(a < b)),
            ">" => Ok(V::Bool(a > b)),
            "<=" => Ok(V::Bool(a <= b)),
            ">=" => Ok(V::Bool(a >= b)),
            "==" => Ok(V::Bool(a == b)),
            "!=" => Ok(V::Bool(a != b)),
            _ => Err(EvalError::unsupported_operator(op, loc)),
        },
        _ => unreachable!("unify_numeric guarantees a shared Int/Float tag"),
    }
}

fn int_compare(op: &str, a: i64, b: i64, loc: Loc) -> Result<V, EvalError> {
    match op {
        "<" => Ok(V::Bool(a < b)),
        ">" => Ok(V::Bool(a > b)),
        "<=" => Ok(V::Bool(a <= b)),
        ">=" => Ok(V::Bool(a >= b)),
        "==" => Ok(V::Bool(a == b)),
        "!=" => Ok(V::Bool(a != b)),
        _ => Err(EvalError::unsupported_operator(op, loc)),
    }
}

fn string_compare(op: &str, a: &str, b: &str, loc: Loc) -> Result<V, EvalError> {
    match op {
        "<" => Ok(V::Bool(a < b)),
        ">" => Ok(V::Bool(a > b)),
        "<=" => Ok(V::Bool(a <= b)),
        ">=" => Ok(V::Bool(a >= b)),
        "==" => Ok(V::Bool(a == b)),
        "!=" => Ok(V::Bool(a != b)),
        _ => Err(EvalError::unsupported_operator(op, loc)),
    }
}
