//! wfexpr Core
//!
//! The dynamic value model shared by the expression evaluator and the
//! built-in function library: tagged values, coercions and equality.

pub mod coerce;
pub mod strings;
pub mod values;

pub use values::{get_expr_type, EvaluationResult, ExprType, Payload};
