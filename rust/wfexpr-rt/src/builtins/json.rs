//! `fromjson(text)`.

use crate::config::{FromJsonConfig, NullPolicy};
use crate::error::EvaluationError;
use wfexpr_core::{EvaluationResult, ExprType, Payload};

/// Decode the string form of `text` as a JSON document.
///
/// Malformed input is an error, never a default value. A top-level `null`
/// decodes to a Null value unless the config rejects it.
pub fn fromjson(
    text: &EvaluationResult,
    config: &FromJsonConfig,
) -> Result<EvaluationResult, EvaluationError> {
    let input = text.coerce_string();
    let decoded: serde_json::Value =
        serde_json::from_str(&input).map_err(|source| EvaluationError::Parse {
            input: input.to_string(),
            source,
        })?;
    let value = EvaluationResult::from_payload(Payload::from(decoded));
    if value.ty == ExprType::Null && config.null == NullPolicy::Reject {
        return Err(EvaluationError::UnsupportedType {
            input: input.into_owned(),
            kind: ExprType::Null,
        });
    }
    Ok(value)
}
