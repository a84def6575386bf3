//! Failure types surfaced to the calling evaluator.

use crate::registry::Arity;
use std::path::PathBuf;
use thiserror::Error;
use wfexpr_core::ExprType;

/// Raised by a function body.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("unable to unmarshal `{input}` fromjson: {source}")]
    Parse {
        input: String,
        source: serde_json::Error,
    },
    #[error("unsupported type {kind} in fromjson for `{input}`")]
    UnsupportedType { input: String, kind: ExprType },
    #[error("{function}() expects an array or a primitive value, got {ty}")]
    NotAnArray { function: &'static str, ty: ExprType },
}

/// The argument count does not satisfy a function's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{function}() requires {expected}, got {supplied}")]
pub struct ArityError {
    pub function: &'static str,
    pub expected: Arity,
    pub supplied: usize,
}

/// Everything [`crate::Registry::call`] can fail with.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error(transparent)]
    Arity(#[from] ArityError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid toml in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
