//! A tiny demonstration CLI: reads a left-to-right token stream for an
//! expression, builds it through the public `Builder` the way a real infix
//! parser would (one `Builder::build` call per operator, in emission
//! order), evaluates it, and prints the result.
//!
//! This binary is not part of the evaluator itself — the library never
//! prints or touches process state; only this boundary does.

use phlox::ast::{Literal, Loc, Runnable, Variable};
use phlox::{Builder, EvalError, MemoryCtx, V};
use saying::say;
use std::env;

fn main() {
    let input: Vec<String> = env::args().skip(1).collect();
    if input.is_empty() {
        print_usage();
        return;
    }

    let tokens: Vec<&str> = input.iter().map(String::as_str).collect();
    let mut ctx = MemoryCtx::new();

    match build_expression(&tokens) {
        Ok(node) => match node.run(&mut ctx) {
            Ok(result) => {
                say!(Green Bold "= ", result.as_string());
                say!(Bright Black "dump: ", node.dump_string());
            }
            Err(e) => print_eval_error(&e),
        },
        Err(e) => print_eval_error(&e),
    }
}

fn print_usage() {
    say!(Bold "phlox — expression evaluator demo");
    say!("Usage: ", Bold "phlox", Italic " <token> <token> ...");
    say!(Bright Black "Example: phlox 1 + 2 '*' 3");
}

fn print_eval_error(e: &EvalError) {
    phlox::errors::print_formatted_error(e);
}

/// Folds a left-to-right token stream (`term (op term)*`) through the
/// Builder, exactly as an infix parser would: each operator is built over
/// the accumulator so far and the next term, letting `Builder::build`'s own
/// precedence rotation do the rebalancing.
fn build_expression(tokens: &[&str]) -> Result<Box<dyn Runnable>, EvalError> {
    let mut pos = 0;
    let mut acc = parse_term(tokens, &mut pos)?;

    while pos < tokens.len() {
        let op = tokens[pos];
        pos += 1;
        let rhs = parse_term(tokens, &mut pos)?;
        acc = Builder::build(op, Some(acc), rhs, Loc::new(1, pos as u32))?;
    }

    Ok(acc)
}

fn parse_term(tokens: &[&str], pos: &mut usize) -> Result<Box<dyn Runnable>, EvalError> {
    let loc = Loc::new(1, *pos as u32);
    let tok = tokens.get(*pos).copied().unwrap_or("");
    *pos += 1;

    let node: Box<dyn Runnable> = match tok {
        "null" => Box::new(Literal::new(V::Null, loc)),
        "true" => Box::new(Literal::new(V::Bool(true), loc)),
        "false" => Box::new(Literal::new(V::Bool(false), loc)),
        s if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 => {
            Box::new(Literal::new(V::String(s[1..s.len() - 1].to_string()), loc))
        }
        s if s.parse::<i64>().is_ok() => {
            Box::new(Literal::new(V::Int(s.parse().unwrap()), loc))
        }
        s if s.parse::<f64>().is_ok() => {
            Box::new(Literal::new(V::Float(s.parse().unwrap()), loc))
        }
        s if !s.is_empty() && s.chars().next().unwrap().is_alphabetic() => {
            Box::new(Variable::new(s, loc))
        }
        other => return Err(EvalError::invalid_operator(other, loc)),
    };

    Ok(node)
}
