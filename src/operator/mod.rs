//! Operator table, node/builder, dispatch engine and the six family
//! routines (spec §4.1–§4.9).

pub mod evaluator;
pub mod families;
pub mod node;
pub mod table;

pub use evaluator::Evaluator;
pub use node::{Builder, OperatorNode};
pub use table::{Family, OperatorDetails};
