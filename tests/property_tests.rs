//! Randomized coverage of P2 (coercion idempotence), P3 (numeric
//! normalization) and P5 (append associativity) from spec §8.

use phlox::ast::{Literal, Loc, Runnable};
use phlox::value::Tag;
use phlox::{Builder, MemoryCtx, V};
use proptest::prelude::*;

fn lit(v: V) -> Box<dyn Runnable> {
    Box::new(Literal::new(v, Loc::default()))
}

fn arb_v() -> impl Strategy<Value = V> {
    prop_oneof![
        Just(V::Null),
        any::<bool>().prop_map(V::Bool),
        any::<i64>().prop_map(V::Int),
        (-1e12f64..1e12f64).prop_map(V::Float),
        "[a-zA-Z0-9]{0,8}".prop_map(V::String),
    ]
}

fn ascii_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{0,6}"
}

proptest! {
    #[test]
    fn p2_as_tag_is_idempotent(v in arb_v(), tag_idx in 0u8..5) {
        let tag = match tag_idx {
            0 => Tag::Null,
            1 => Tag::Bool,
            2 => Tag::Int,
            3 => Tag::Float,
            _ => Tag::String,
        };
        let once = v.as_tag(tag);
        let twice = once.as_tag(tag);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn p3_numeric_family_always_shares_a_tag(a in any::<i64>(), b in any::<f64>()) {
        let mut ctx = MemoryCtx::new();
        let node = Builder::build("+", Some(lit(V::Int(a))), lit(V::Float(b)), Loc::default())
            .unwrap();
        let result = node.run(&mut ctx).unwrap();
        prop_assert_eq!(result.tag(), Tag::Float);
    }

    #[test]
    fn p5_append_is_associative(a in ascii_string(), b in ascii_string(), c in ascii_string()) {
        let mut ctx = MemoryCtx::new();

        let left = Builder::build(
            ".",
            Some(Builder::build(
                ".",
                Some(lit(V::String(a.clone()))),
                lit(V::String(b.clone())),
                Loc::default(),
            ).unwrap()),
            lit(V::String(c.clone())),
            Loc::default(),
        ).unwrap();

        let right = Builder::build(
            ".",
            Some(lit(V::String(a))),
            Builder::build(".", Some(lit(V::String(b))), lit(V::String(c)), Loc::default())
                .unwrap(),
            Loc::default(),
        ).unwrap();

        prop_assert_eq!(left.run(&mut ctx).unwrap(), right.run(&mut ctx).unwrap());
    }
}
