//! Built-in function implementations and their dispatch table.

mod join;
mod json;
mod search;

pub use join::{join, DEFAULT_SEPARATOR};
pub use json::fromjson;
pub use search::{contains, endswith, startswith};

use crate::config::FunctionConfig;
use crate::error::{ArityError, FunctionError};
use crate::registry::Arity;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use wfexpr_core::EvaluationResult;

/// The functions callable from an expression.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Builtin {
    Contains,
    StartsWith,
    EndsWith,
    Join,
    FromJson,
}

impl Builtin {
    /// Registry key: the lowercase function name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn arity(self) -> Arity {
        match self {
            Builtin::Contains | Builtin::StartsWith | Builtin::EndsWith => Arity::Exact(2),
            Builtin::Join => Arity::Variadic {
                min: 1,
                max: Some(2),
            },
            Builtin::FromJson => Arity::Exact(1),
        }
    }

    /// Run the function over already-evaluated arguments.
    pub fn call(
        self,
        args: &[EvaluationResult],
        config: &FunctionConfig,
    ) -> Result<EvaluationResult, FunctionError> {
        let result = match (self, args) {
            (Builtin::Contains, [search, item]) => contains(search, item),
            (Builtin::StartsWith, [left, right]) => startswith(left, right),
            (Builtin::EndsWith, [left, right]) => endswith(left, right),
            (Builtin::Join, [value]) => join(value, None)?,
            (Builtin::Join, [value, separator]) => join(value, Some(separator))?,
            (Builtin::FromJson, [text]) => fromjson(text, &config.fromjson)?,
            _ => {
                return Err(ArityError {
                    function: self.name(),
                    expected: self.arity(),
                    supplied: args.len(),
                }
                .into())
            }
        };
        Ok(result)
    }
}
