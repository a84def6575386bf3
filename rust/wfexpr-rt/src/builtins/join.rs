//! `join(value, separator?)`.

use crate::error::EvaluationError;
use std::borrow::Cow;
use wfexpr_core::EvaluationResult;

pub const DEFAULT_SEPARATOR: &str = ",";

/// Concatenate the string form of each array element.
///
/// A primitive first argument is returned unchanged. Anything else must be
/// an array; objects are rejected.
pub fn join(
    value: &EvaluationResult,
    separator: Option<&EvaluationResult>,
) -> Result<EvaluationResult, EvaluationError> {
    if value.is_primitive() {
        return Ok(value.clone());
    }
    let elements = value.coerce_slice().ok_or(EvaluationError::NotAnArray {
        function: "join",
        ty: value.ty,
    })?;
    let separator = separator.map_or(Cow::Borrowed(DEFAULT_SEPARATOR), |s| s.coerce_string());
    let parts: Vec<_> = elements.iter().map(EvaluationResult::coerce_string).collect();
    Ok(EvaluationResult::string(parts.join(&*separator)))
}
