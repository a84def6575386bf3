//! Tagged value representation for expression results.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use strum::{Display, EnumIter};

/// Raw dynamic payload of an expression result.
///
/// Mirrors the shapes JSON decoding can produce. Array elements and object
/// members are raw payloads; their tags are recovered with [`get_expr_type`].
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Payload {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Payload>),
    Object(BTreeMap<String, Payload>),
}

/// Static type tag carried alongside every payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExprType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ExprType {
    /// Null, Bool, Number and String are primitive; Array and Object are not.
    pub fn is_primitive(self) -> bool {
        !matches!(self, ExprType::Array | ExprType::Object)
    }
}

/// Classify a decoded payload.
pub fn get_expr_type(raw: &Payload) -> ExprType {
    match raw {
        Payload::Null => ExprType::Null,
        Payload::Bool(_) => ExprType::Bool,
        Payload::Number(_) => ExprType::Number,
        Payload::String(_) => ExprType::String,
        Payload::Array(_) => ExprType::Array,
        Payload::Object(_) => ExprType::Object,
    }
}

impl From<serde_json::Value> for Payload {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Payload::Null,
            serde_json::Value::Bool(b) => Payload::Bool(b),
            serde_json::Value::Number(n) => Payload::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Payload::String(s),
            serde_json::Value::Array(items) => {
                Payload::Array(items.into_iter().map(Payload::from).collect())
            }
            serde_json::Value::Object(map) => {
                Payload::Object(map.into_iter().map(|(k, v)| (k, Payload::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Payload {
    fn from(b: bool) -> Self {
        Payload::Bool(b)
    }
}

impl From<f64> for Payload {
    fn from(n: f64) -> Self {
        Payload::Number(n)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::String(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::String(s)
    }
}

impl<T: Into<Payload>> From<Vec<T>> for Payload {
    fn from(items: Vec<T>) -> Self {
        Payload::Array(items.into_iter().map(Into::into).collect())
    }
}

/// A runtime value: a payload paired with its type tag.
///
/// The tag is carried separately so callers can synthesize results whose
/// tag does not follow from the payload. Values built by decoding or
/// coercion always carry the tag [`get_expr_type`] would assign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub value: Payload,
    #[serde(rename = "type")]
    pub ty: ExprType,
}

impl EvaluationResult {
    pub fn new(value: Payload, ty: ExprType) -> Self {
        Self { value, ty }
    }

    /// Wrap a payload, inferring its tag.
    pub fn from_payload(value: Payload) -> Self {
        let ty = get_expr_type(&value);
        Self { value, ty }
    }

    pub fn null() -> Self {
        Self::new(Payload::Null, ExprType::Null)
    }

    pub fn bool(b: bool) -> Self {
        Self::new(Payload::Bool(b), ExprType::Bool)
    }

    pub fn number(n: f64) -> Self {
        Self::new(Payload::Number(n), ExprType::Number)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::new(Payload::String(s.into()), ExprType::String)
    }

    pub fn array(items: Vec<Payload>) -> Self {
        Self::new(Payload::Array(items), ExprType::Array)
    }

    pub fn object(members: BTreeMap<String, Payload>) -> Self {
        Self::new(Payload::Object(members), ExprType::Object)
    }

    /// True unless the tag is Array or Object.
    pub fn is_primitive(&self) -> bool {
        self.ty.is_primitive()
    }

    /// Canonical JSON form of the payload.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.value).unwrap_or(serde_json::Value::Null)
    }
}

impl From<Payload> for EvaluationResult {
    fn from(value: Payload) -> Self {
        Self::from_payload(value)
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.coerce_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_expr_type_covers_json_shapes() {
        let cases = [
            (json!([1, 2]), ExprType::Array),
            (json!({"a": 1}), ExprType::Object),
            (json!("s"), ExprType::String),
            (json!(1.5), ExprType::Number),
            (json!(7), ExprType::Number),
            (json!(true), ExprType::Bool),
            (json!(null), ExprType::Null),
        ];
        for (raw, expected) in cases {
            assert_eq!(get_expr_type(&Payload::from(raw)), expected);
        }
    }

    #[test]
    fn test_primitiveness() {
        assert!(EvaluationResult::null().is_primitive());
        assert!(EvaluationResult::bool(false).is_primitive());
        assert!(EvaluationResult::number(1.0).is_primitive());
        assert!(EvaluationResult::string("x").is_primitive());
        assert!(!EvaluationResult::array(vec![]).is_primitive());
        assert!(!EvaluationResult::object(BTreeMap::new()).is_primitive());
    }

    #[test]
    fn test_tag_is_independent_of_payload() {
        let synthesized = EvaluationResult::new(Payload::Null, ExprType::Bool);
        assert!(synthesized.is_primitive());
        assert_eq!(synthesized.ty, ExprType::Bool);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(ExprType::Number.to_string(), "number");
        assert_eq!(ExprType::Object.to_string(), "object");
    }

    #[test]
    fn test_to_json_is_canonical() {
        let decoded = Payload::from(json!({"b": [1, "two", false], "a": null}));
        let value = EvaluationResult::from_payload(decoded);
        assert_eq!(value.to_json(), json!({"a": null, "b": [1.0, "two", false]}));
    }
}
