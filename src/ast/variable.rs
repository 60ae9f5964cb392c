use crate::ast::{Loc, Runnable, Writable};
use crate::context::Ctx;
use crate::errors::EvalError;
use crate::value::V;
use std::fmt;

/// A named variable slot. `Writable` — assigning to it stores through
/// `Ctx::write_var`, observable by any later read in the same context
/// (spec P6: write-then-read).
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    loc: Loc,
}

impl Variable {
    pub fn new(name: impl Into<String>, loc: Loc) -> Self {
        Variable {
            name: name.into(),
            loc,
        }
    }
}

impl Runnable for Variable {
    fn run(&self, ctx: &mut dyn Ctx) -> Result<V, EvalError> {
        Ok(ctx.read_var(&self.name))
    }

    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self.name)
    }

    fn loc(&self) -> Loc {
        self.loc
    }

    fn as_writable(&self) -> Option<&dyn Writable> {
        Some(self)
    }
}

impl Writable for Variable {
    fn write(&self, ctx: &mut dyn Ctx, value: V) -> Result<(), EvalError> {
        ctx.write_var(&self.name, value);
        Ok(())
    }
}
