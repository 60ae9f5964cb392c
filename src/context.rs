//! The ambient evaluation context: the three-point collaborator contract
//! from spec §6 (output sink, variable/slot resolution, cancellation), plus
//! a minimal in-memory implementation good enough to run and test the
//! evaluator end to end.

use crate::settings::EvalSettings;
use crate::value::V;
use rustc_hash::FxHashMap;
use std::io::Write;

/// The collaborator boundary the evaluator is built against. Never
/// constructed or captured at module scope — always threaded through
/// explicitly (spec §9: "The Context is passed, never captured at module
/// scope").
pub trait Ctx {
    /// Write-only byte stream. The evaluator itself never writes to it —
    /// only surrounding code (and the demo CLI) does.
    fn output_sink(&mut self) -> &mut dyn Write;

    /// Reads a variable slot by name. Returns `V::Null` for an unset slot,
    /// matching the language's "undefined reads as null" convention.
    fn read_var(&self, name: &str) -> V;

    /// Writes a variable slot by name. Observable in the surrounding
    /// environment — this is the backing store `Writable::write` reaches.
    fn write_var(&mut self, name: &str, value: V);

    /// Cooperative cancellation signal, polled by the evaluator between
    /// children (spec §5: "honored only at evaluation boundaries").
    fn is_cancelled(&self) -> bool {
        false
    }

    /// Evaluator-wide tunables (shift-masking policy, assumed Int width).
    /// Defaults to `EvalSettings::default()`; a host embedding the evaluator
    /// overrides this to change that behavior without a separate parameter
    /// threaded through every node.
    fn settings(&self) -> EvalSettings {
        EvalSettings::default()
    }
}

/// A minimal, in-memory [`Ctx`] backed by an [`FxHashMap`] variable store and
/// an in-memory output buffer — enough to drive the evaluator in tests and
/// the demo CLI without any real I/O or process state.
#[derive(Default)]
pub struct MemoryCtx {
    vars: FxHashMap<String, V>,
    output: Vec<u8>,
    cancelled: bool,
    settings: EvalSettings,
}

impl MemoryCtx {
    pub fn new() -> Self {
        MemoryCtx::default()
    }

    /// Builds a context that reports `settings` from `Ctx::settings`, rather
    /// than the library default.
    pub fn with_settings(settings: EvalSettings) -> Self {
        MemoryCtx {
            settings,
            ..MemoryCtx::default()
        }
    }

    pub fn output_as_str(&self) -> &str {
        std::str::from_utf8(&self.output).unwrap_or("")
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

impl Ctx for MemoryCtx {
    fn output_sink(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn read_var(&self, name: &str) -> V {
        self.vars.get(name).cloned().unwrap_or(V::Null)
    }

    fn write_var(&mut self, name: &str, value: V) {
        self.vars.insert(name.to_string(), value);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn settings(&self) -> EvalSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_reads_as_null() {
        let ctx = MemoryCtx::new();
        assert_eq!(ctx.read_var("x"), V::Null);
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut ctx = MemoryCtx::new();
        ctx.write_var("x", V::Int(42));
        assert_eq!(ctx.read_var("x"), V::Int(42));
    }

    #[test]
    fn default_ctx_reports_default_settings() {
        let ctx = MemoryCtx::new();
        assert_eq!(ctx.settings().mask_shift_counts, EvalSettings::default().mask_shift_counts);
    }

    #[test]
    fn with_settings_overrides_reported_settings() {
        let settings = EvalSettings {
            mask_shift_counts: false,
            ..EvalSettings::default()
        };
        let ctx = MemoryCtx::with_settings(settings);
        assert!(!ctx.settings().mask_shift_counts);
    }
}
