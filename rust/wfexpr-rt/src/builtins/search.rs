//! `contains`, `startswith` and `endswith`.
//!
//! None of these fail: a shape they cannot search yields `false`.

use wfexpr_core::strings::{contains_ignore_case, ends_with_ignore_case, starts_with_ignore_case};
use wfexpr_core::{EvaluationResult, ExprType};

/// True if `search` contains `item`.
///
/// A primitive `search` is coerced to a string and checked for `item` as a
/// substring, ignoring case. An array `search` is checked for an element
/// loosely equal to `item`. Objects are never searched, and a non-primitive
/// `item` is never found.
pub fn contains(search: &EvaluationResult, item: &EvaluationResult) -> EvaluationResult {
    if !item.is_primitive() {
        return EvaluationResult::bool(false);
    }
    let found = if search.is_primitive() {
        contains_ignore_case(&search.coerce_string(), &item.coerce_string())
    } else {
        match search.ty {
            ExprType::Array => search
                .coerce_slice()
                .is_some_and(|elements| elements.iter().any(|element| item.equals(element))),
            _ => false,
        }
    };
    EvaluationResult::bool(found)
}

pub fn startswith(left: &EvaluationResult, right: &EvaluationResult) -> EvaluationResult {
    if !left.is_primitive() || !right.is_primitive() {
        return EvaluationResult::bool(false);
    }
    EvaluationResult::bool(starts_with_ignore_case(
        &left.coerce_string(),
        &right.coerce_string(),
    ))
}

pub fn endswith(left: &EvaluationResult, right: &EvaluationResult) -> EvaluationResult {
    if !left.is_primitive() || !right.is_primitive() {
        return EvaluationResult::bool(false);
    }
    EvaluationResult::bool(ends_with_ignore_case(
        &left.coerce_string(),
        &right.coerce_string(),
    ))
}
