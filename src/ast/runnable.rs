use crate::context::Ctx;
use crate::errors::EvalError;
use crate::value::V;
use std::fmt;

/// An AST node capable of evaluating to a [`V`] (spec §6).
///
/// `run` is synchronous and single-threaded within one `Ctx` — it never
/// suspends and never touches another context's state (spec §5).
pub trait Runnable: fmt::Debug {
    fn run(&self, ctx: &mut dyn Ctx) -> Result<V, EvalError>;

    /// Emits `(left op right)` with parentheses always present; for
    /// debugging and golden-file comparison only, never for re-parsing.
    fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    fn dump_string(&self) -> String {
        let mut s = String::new();
        // A `fmt::Write` impl never fails for `String`, so this is infallible
        // in practice; propagate the error type anyway for API honesty.
        let _ = self.dump(&mut s);
        s
    }

    fn loc(&self) -> crate::ast::Loc;

    /// Capability probe used by the evaluator to test whether this node is
    /// also [`Writable`], without downcasting the whole AST (spec §9: "a
    /// dedicated `as_writable()` method returning an optional handle").
    /// Nodes that implement `Writable` override this to return `Some(self)`.
    fn as_writable(&self) -> Option<&dyn Writable> {
        None
    }

    /// Capability probe the Builder uses to test whether an already-built
    /// node is itself an operator node, so it can inspect (and, on rotation,
    /// mutate) its priority without the AST knowing about rotation at all.
    fn as_any(&self) -> &dyn std::any::Any
    where
        Self: 'static,
    {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any
    where
        Self: 'static,
    {
        self
    }
}

/// A refinement of [`Runnable`] exposed by nodes that denote a storable
/// location (a variable slot, an element slot, a property slot). The
/// evaluator never inspects the location's structure — it only calls
/// `write`.
pub trait Writable: Runnable {
    fn write(&self, ctx: &mut dyn Ctx, value: V) -> Result<(), EvalError>;
}
