//! Unified error type for the evaluator.
//!
//! Mirrors the shape of the teacher's `CompileError` (one struct, an
//! `ErrorType`-style kind enum, carried location) but scoped to the small,
//! closed taxonomy spec §7 defines — no LSP/metadata surface, since the
//! evaluator has no suggestions to offer.

use crate::ast::Loc;
use std::fmt;

/// The closed taxonomy of runtime/build-time failures from spec §7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Builder-time: an operator symbol not present in the operator table.
    InvalidOperator,
    /// Runtime: a `write`-flagged operator's left side isn't a `Writable`.
    NotAssignable,
    /// Runtime: integer division (or modulo) by zero.
    DivisionByZero,
    /// Runtime: a symbol reached a family routine with no reduction for it
    /// (the `and`/`xor`/`ro`/`<=>` open questions, and unreachable pairs).
    UnsupportedOperator,
    /// Reserved for lossless-only coercion modes; current coercions are total.
    CoercionError,
    /// Cooperative cancellation observed at an evaluation boundary.
    Cancelled,
}

impl EvalErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EvalErrorKind::InvalidOperator => "invalid operator",
            EvalErrorKind::NotAssignable => "not assignable",
            EvalErrorKind::DivisionByZero => "division by zero",
            EvalErrorKind::UnsupportedOperator => "unsupported operator",
            EvalErrorKind::CoercionError => "coercion error",
            EvalErrorKind::Cancelled => "cancelled",
        }
    }
}

/// An evaluator failure. Carries the `loc` of the node at which it surfaced
/// so upstream reporting can point to source (§7: "All errors carry the
/// `loc` of the node at which they surfaced").
#[derive(Debug, Clone, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub msg: String,
    pub loc: Loc,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, msg: impl Into<String>, loc: Loc) -> Self {
        EvalError {
            kind,
            msg: msg.into(),
            loc,
        }
    }

    pub fn invalid_operator(op: &str, loc: Loc) -> Self {
        EvalError::new(
            EvalErrorKind::InvalidOperator,
            format!("invalid operator '{op}'"),
            loc,
        )
    }

    pub fn not_assignable(dump: &str, loc: Loc) -> Self {
        EvalError::new(
            EvalErrorKind::NotAssignable,
            format!("cannot assign to non-writable expression: {dump}"),
            loc,
        )
    }

    pub fn division_by_zero(loc: Loc) -> Self {
        EvalError::new(EvalErrorKind::DivisionByZero, "division by zero", loc)
    }

    pub fn unsupported_operator(op: &str, loc: Loc) -> Self {
        EvalError::new(
            EvalErrorKind::UnsupportedOperator,
            format!("operator '{op}' is not supported for these operand types"),
            loc,
        )
    }

    pub fn cancelled(loc: Loc) -> Self {
        EvalError::new(EvalErrorKind::Cancelled, "evaluation cancelled", loc)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.kind.as_str(),
            self.loc.line,
            self.loc.column,
            self.msg
        )
    }
}

impl std::error::Error for EvalError {}

/// Pretty-prints an [`EvalError`] the way the teacher's
/// `print_formatted_error` does — colored, one line, for the demo CLI.
pub fn print_formatted_error(e: &EvalError) {
    use saying::say;

    say!(
        Red Bold e.kind.as_str(),
        format!(" ({}:{}): ", e.loc.line, e.loc.column),
        e.msg.as_str()
    );
}
