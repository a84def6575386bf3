//! Coercion and loose equality over [`EvaluationResult`].
//!
//! These follow the documented expression rules of GitHub Actions:
//!
//! | type   | string              | number                    |
//! |--------|---------------------|---------------------------|
//! | null   | `""`                | `0`                       |
//! | bool   | `true` / `false`    | `1` / `0`                 |
//! | number | decimal             | itself                    |
//! | string | itself              | parsed, `""` is `0`       |
//! | array  | `Array`             | `NaN`                     |
//! | object | `Object`            | `NaN`                     |
//!
//! All coercions are total. Primitiveness is decided by the type tag, the
//! converted data is read from the payload.

use crate::strings;
use crate::values::{get_expr_type, EvaluationResult, ExprType, Payload};
use std::borrow::Cow;

/// Integral numbers below this magnitude print without exponent.
const PLAIN_INTEGER_LIMIT: f64 = 1e15;

impl EvaluationResult {
    /// Canonical string projection of this value.
    pub fn coerce_string(&self) -> Cow<'_, str> {
        payload_to_str(&self.value)
    }

    /// Numeric projection; `NaN` when the value has no numeric reading.
    pub fn coerce_number(&self) -> f64 {
        match &self.value {
            Payload::Null => 0.0,
            Payload::Bool(b) => f64::from(u8::from(*b)),
            Payload::Number(n) => *n,
            Payload::String(s) => parse_number(s),
            Payload::Array(_) | Payload::Object(_) => f64::NAN,
        }
    }

    /// Elements of an array value, each tagged by [`get_expr_type`].
    ///
    /// `None` means "not array-shaped": either the tag is not Array or the
    /// payload does not hold a sequence.
    pub fn coerce_slice(&self) -> Option<Vec<EvaluationResult>> {
        match (&self.ty, &self.value) {
            (ExprType::Array, Payload::Array(items)) => Some(
                items
                    .iter()
                    .map(|raw| EvaluationResult::new(raw.clone(), get_expr_type(raw)))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Loose equality between two primitive values.
    ///
    /// Arrays and objects never compare equal. Strings compare without
    /// regard to case; mismatched types are compared as numbers.
    pub fn equals(&self, other: &EvaluationResult) -> bool {
        if !self.is_primitive() || !other.is_primitive() {
            return false;
        }
        match (self.ty, other.ty) {
            (ExprType::Null, ExprType::Null) => true,
            (ExprType::String, ExprType::String) => {
                strings::eq_ignore_case(&self.coerce_string(), &other.coerce_string())
            }
            _ => self.coerce_number() == other.coerce_number(),
        }
    }
}

fn payload_to_str(value: &Payload) -> Cow<'_, str> {
    match value {
        Payload::Null => Cow::Borrowed(""),
        Payload::Bool(true) => Cow::Borrowed("true"),
        Payload::Bool(false) => Cow::Borrowed("false"),
        Payload::Number(n) => Cow::Owned(format_number(*n)),
        Payload::String(s) => Cow::Borrowed(s.as_str()),
        Payload::Array(_) => Cow::Borrowed("Array"),
        Payload::Object(_) => Cow::Borrowed("Object"),
    }
}

/// Format a number the way expressions print it: integers without a
/// fraction, very large or very small magnitudes in exponent form.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    let magnitude = n.abs();
    if n.fract() == 0.0 && magnitude < PLAIN_INTEGER_LIMIT {
        format!("{}", n as i64)
    } else if magnitude >= PLAIN_INTEGER_LIMIT || magnitude < 1e-6 {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

/// Parse a string as a number. Accepts decimal and exponent notation plus
/// `0x`/`0o` integer prefixes; surrounding whitespace is ignored.
fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(hex) = trimmed.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).map_or(f64::NAN, |n| n as f64);
    }
    if let Some(oct) = trimmed.strip_prefix("0o") {
        return i64::from_str_radix(oct, 8).map_or(f64::NAN, |n| n as f64);
    }
    // Reject the word forms ("inf", "NaN") the float parser would accept.
    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
