use crate::ast::{Loc, Runnable};
use crate::context::Ctx;
use crate::errors::EvalError;
use crate::value::V;
use std::fmt;

/// A constant leaf node. Never writable — literals have no backing slot.
#[derive(Debug, Clone)]
pub struct Literal {
    value: V,
    loc: Loc,
}

impl Literal {
    pub fn new(value: V, loc: Loc) -> Self {
        Literal { value, loc }
    }
}

impl Runnable for Literal {
    fn run(&self, _ctx: &mut dyn Ctx) -> Result<V, EvalError> {
        Ok(self.value.clone())
    }

    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self.value)
    }

    fn loc(&self) -> Loc {
        self.loc
    }
}
