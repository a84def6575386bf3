//! wfexpr RT — the built-in function library for workflow expressions.
//!
//! An evaluator resolves a call's arguments to [`EvaluationResult`]s and hands
//! them to [`Registry::call`], which validates the argument count and runs
//! the builtin. Functions are pure and synchronous; the standard registry is
//! built once and shared across threads.
#![warn(clippy::all)]

pub mod builtins;
pub mod config;
pub mod error;
pub mod registry;

pub use builtins::Builtin;
pub use config::{FromJsonConfig, FunctionConfig, NullPolicy};
pub use error::{ArityError, ConfigError, EvaluationError, FunctionError};
pub use registry::{Arity, FunctionDescriptor, Registry};

// Re-export the value model so callers need a single dependency.
pub use wfexpr_core::{coerce, get_expr_type, strings, values, EvaluationResult, ExprType, Payload};
