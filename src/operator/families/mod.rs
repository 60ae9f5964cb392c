//! The six operator-family routines (spec §4.4–§4.9). Each is a pure
//! function of already-evaluated operands; none touches `Ctx` directly —
//! `math_logic` takes the evaluator's already-resolved `EvalSettings`
//! rather than `Ctx` itself, keeping the family routines free of any
//! environment dependency beyond the tunables they need.

mod append;
mod bool_logic;
mod compare;
mod math;
mod math_logic;
mod not;

pub use append::append;
pub use bool_logic::bool_logic;
pub use compare::{compare, compare_strict};
pub use math::math;
pub use math_logic::math_logic;
pub use not::not;
