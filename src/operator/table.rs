//! The static operator catalogue (spec §4.1): one entry per symbol, carrying
//! everything the Builder and Evaluator need to know about it ahead of time.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Which family routine a symbol dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Append,
    Math,
    MathLogic,
    Compare,
    Not,
    BoolLogic,
    /// No family routine: the evaluator's result is `b` unconditionally
    /// (bare `=`, and `??` until short-circuit is lifted — spec §9 item 2).
    None,
}

#[derive(Debug, Clone, Copy)]
pub struct OperatorDetails {
    /// True if the operator assigns to `left` after evaluating.
    pub write: bool,
    /// True if operands must be pre-coerced to a common numeric type.
    pub numeric: bool,
    /// True if `left` must NOT be evaluated for its value (bare `=`).
    pub skip_a: bool,
    pub family: Family,
    /// Integer precedence; smaller binds tighter. Builder-only.
    pub priority: u32,
}

macro_rules! op {
    (write: $write:expr, numeric: $numeric:expr, skip_a: $skip_a:expr, family: $family:expr, pri: $pri:expr $(,)?) => {
        OperatorDetails {
            write: $write,
            numeric: $numeric,
            skip_a: $skip_a,
            family: $family,
            priority: $pri,
        }
    };
}

/// Built once, looked up by symbol for every Builder call and every
/// evaluation. `and`/`xor`/`ro`/`??`/`<=>` are present here exactly as in the
/// source this spec was distilled from, even though no family routine
/// reduces them yet (spec §9 open questions 1–3) — they fail at dispatch
/// time with `UnsupportedOperator`, not at Builder time with
/// `InvalidOperator`.
pub static OPERATOR_TABLE: LazyLock<FxHashMap<&'static str, OperatorDetails>> =
    LazyLock::new(|| {
        use Family::*;
        let mut t = FxHashMap::default();
        let mut ins = |sym: &'static str, d: OperatorDetails| {
            t.insert(sym, d);
        };

        // Assignment
        ins(
            "=",
            op!(write: true, numeric: false, skip_a: true, family: None, pri: 25),
        );
        ins(
            ".=",
            op!(write: true, numeric: false, skip_a: false, family: Append, pri: 25),
        );
        for sym in ["+=", "-=", "*=", "/=", "**="] {
            ins(
                sym,
                op!(write: true, numeric: true, skip_a: false, family: Math, pri: 25),
            );
        }
        for sym in ["|=", "^=", "&=", "%=", "<<=", ">>="] {
            ins(
                sym,
                op!(write: true, numeric: true, skip_a: false, family: MathLogic, pri: 25),
            );
        }

        // Concatenation
        ins(
            ".",
            op!(write: false, numeric: false, skip_a: false, family: Append, pri: 14),
        );

        // Math
        ins(
            "+",
            op!(write: false, numeric: true, skip_a: false, family: Math, pri: 14),
        );
        ins(
            "-",
            op!(write: false, numeric: true, skip_a: false, family: Math, pri: 14),
        );
        ins(
            "/",
            op!(write: false, numeric: true, skip_a: false, family: Math, pri: 13),
        );
        ins(
            "*",
            op!(write: false, numeric: true, skip_a: false, family: Math, pri: 13),
        );
        ins(
            "**",
            op!(write: false, numeric: true, skip_a: false, family: Math, pri: 10),
        );

        // Bit / shift
        ins(
            "|",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 20),
        );
        ins(
            "^",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 19),
        );
        ins(
            "&",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 18),
        );
        ins(
            "%",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 13),
        );
        ins(
            "~",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 11),
        );
        ins(
            "<<",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 15),
        );
        ins(
            ">>",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 15),
        );
        // Named word operators: table entries exist, no family arm reduces
        // them (spec §9 open question 1).
        ins(
            "and",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 26),
        );
        ins(
            "xor",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 27),
        );
        ins(
            "ro",
            op!(write: false, numeric: true, skip_a: false, family: MathLogic, pri: 28),
        );

        // Compare
        for sym in ["<", ">", "<=", ">="] {
            ins(
                sym,
                op!(write: false, numeric: false, skip_a: false, family: Compare, pri: 16),
            );
        }
        for sym in ["==", "===", "!=", "<>", "<=>", "!=="] {
            ins(
                sym,
                op!(write: false, numeric: false, skip_a: false, family: Compare, pri: 17),
            );
        }

        // Logical
        ins(
            "!",
            op!(write: false, numeric: false, skip_a: false, family: Not, pri: 12),
        );
        ins(
            "&&",
            op!(write: false, numeric: false, skip_a: false, family: BoolLogic, pri: 21),
        );
        ins(
            "||",
            op!(write: false, numeric: false, skip_a: false, family: BoolLogic, pri: 22),
        );
        ins(
            "??",
            op!(write: false, numeric: false, skip_a: false, family: None, pri: 23),
        );

        t
    });

/// Looks up a symbol's static details. `None` means the symbol is not a
/// known operator at all (Builder-time `InvalidOperator`); this is distinct
/// from a known symbol whose family can't reduce it yet (runtime
/// `UnsupportedOperator`).
pub fn lookup(symbol: &str) -> Option<&'static OperatorDetails> {
    OPERATOR_TABLE.get(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_operators_resolve() {
        assert!(lookup("+").is_some());
        assert!(lookup("===").is_some());
        assert!(lookup("and").is_some());
    }

    #[test]
    fn unknown_operator_is_absent() {
        assert!(lookup("@@").is_none());
    }

    #[test]
    fn priorities_match_precedence_table() {
        assert_eq!(lookup("*").unwrap().priority, 13);
        assert_eq!(lookup("+").unwrap().priority, 14);
        assert!(lookup("*").unwrap().priority < lookup("+").unwrap().priority);
    }
}
