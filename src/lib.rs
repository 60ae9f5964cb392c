//! Expression evaluator for a dynamically-typed, loosely-coerced scripting
//! language: a tagged value model, an operator AST, and the dispatch engine
//! that walks it.

pub mod ast;
pub mod context;
pub mod errors;
pub mod operator;
pub mod settings;
pub mod value;

pub use context::{Ctx, MemoryCtx};
pub use errors::{EvalError, EvalErrorKind};
pub use operator::{Builder, Evaluator};
pub use settings::EvalSettings;
pub use value::{Tag, V};
