//! Name-based dispatch with argument count validation.

use crate::builtins::Builtin;
use crate::config::FunctionConfig;
use crate::error::{ArityError, FunctionError};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, trace};
use wfexpr_core::EvaluationResult;

static STANDARD: Lazy<Registry> = Lazy::new(|| Registry::with_config(FunctionConfig::default()));

/// How many arguments a function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// At least `min`, and at most `max` when bounded.
    Variadic { min: usize, max: Option<usize> },
}

impl Arity {
    /// Build from the integer form: positive values must be matched exactly,
    /// negative values give the minimum number of arguments.
    pub fn from_count(count: i32) -> Self {
        if count >= 0 {
            Arity::Exact(count as usize)
        } else {
            Arity::Variadic {
                min: count.unsigned_abs() as usize,
                max: None,
            }
        }
    }

    /// Integer form of this contract, the inverse of [`Arity::from_count`].
    ///
    /// Upper bounds are dropped. `None` when the contract has no integer
    /// form: a variadic minimum of zero (which would read back as
    /// `Exact(0)`) or a count beyond `i32`.
    pub fn count(&self) -> Option<i32> {
        match *self {
            Arity::Exact(n) => i32::try_from(n).ok(),
            Arity::Variadic { min: 0, .. } => None,
            Arity::Variadic { min, .. } => i32::try_from(min).ok().map(|m| -m),
        }
    }

    pub fn accepts(&self, supplied: usize) -> bool {
        match *self {
            Arity::Exact(n) => supplied == n,
            Arity::Variadic { min, max } => supplied >= min && max.map_or(true, |m| supplied <= m),
        }
    }

    pub fn check(&self, function: &'static str, supplied: usize) -> Result<(), ArityError> {
        if self.accepts(supplied) {
            Ok(())
        } else {
            Err(ArityError {
                function,
                expected: *self,
                supplied,
            })
        }
    }
}

fn arguments(n: usize) -> &'static str {
    if n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exact(n) => write!(f, "exactly {} {}", n, arguments(n)),
            Arity::Variadic { min, max: None } => write!(f, "at least {} {}", min, arguments(min)),
            Arity::Variadic { min, max: Some(max) } => {
                write!(f, "between {} and {} arguments", min, max)
            }
        }
    }
}

/// A registered function: its name, argument contract and implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub arity: Arity,
    pub builtin: Builtin,
}

impl FunctionDescriptor {
    pub fn call(
        &self,
        args: &[EvaluationResult],
        config: &FunctionConfig,
    ) -> Result<EvaluationResult, FunctionError> {
        self.builtin.call(args, config)
    }
}

impl From<Builtin> for FunctionDescriptor {
    fn from(builtin: Builtin) -> Self {
        Self {
            name: builtin.name(),
            arity: builtin.arity(),
            builtin,
        }
    }
}

/// Immutable mapping from function name to descriptor.
#[derive(Debug, Clone)]
pub struct Registry {
    functions: HashMap<&'static str, FunctionDescriptor>,
    config: FunctionConfig,
}

impl Registry {
    /// The process-wide registry with default configuration.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    pub fn with_config(config: FunctionConfig) -> Self {
        let functions = Builtin::iter()
            .map(FunctionDescriptor::from)
            .map(|d| (d.name, d))
            .collect();
        Self { functions, config }
    }

    /// Find a function by name. Names match regardless of ASCII case, so
    /// `startsWith` and `fromJSON` resolve as well.
    pub fn lookup(&self, name: &str) -> Option<&FunctionDescriptor> {
        if let Some(descriptor) = self.functions.get(name) {
            return Some(descriptor);
        }
        let builtin = Builtin::from_str(name).ok()?;
        self.functions.get(builtin.name())
    }

    pub fn config(&self) -> &FunctionConfig {
        &self.config
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look up `name`, validate the argument count and run the function.
    pub fn call(
        &self,
        name: &str,
        args: &[EvaluationResult],
    ) -> Result<EvaluationResult, FunctionError> {
        trace!(function = name, args = args.len(), "calling builtin");
        let Some(descriptor) = self.lookup(name) else {
            debug!(function = name, "unknown function");
            return Err(FunctionError::UnknownFunction(name.to_string()));
        };
        if let Err(err) = descriptor.arity.check(descriptor.name, args.len()) {
            debug!(function = descriptor.name, error = %err, "argument count rejected");
            return Err(err.into());
        }
        descriptor
            .call(args, &self.config)
            .inspect_err(|err| debug!(function = descriptor.name, error = %err, "builtin failed"))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_config(FunctionConfig::default())
    }
}
