//! Case-insensitive string matching.
//!
//! Expression string comparisons ignore case. Both sides are folded with
//! Unicode lowercasing before matching, so `"ÄBC"` starts with `"äb"`.

use std::borrow::Cow;

/// Lowercase `s`, borrowing when lowercasing leaves every char unchanged.
///
/// Checks the lowercase mapping rather than `is_uppercase`, since titlecase
/// letters such as `ǅ` are not uppercase yet still fold.
pub fn fold_case(s: &str) -> Cow<'_, str> {
    if s.chars().all(lowercases_to_itself) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

fn lowercases_to_itself(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&*fold_case(needle))
}

pub fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    fold_case(haystack).starts_with(&*fold_case(prefix))
}

pub fn ends_with_ignore_case(haystack: &str, suffix: &str) -> bool {
    fold_case(haystack).ends_with(&*fold_case(suffix))
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case_borrows_when_lowercase() {
        assert!(matches!(fold_case("already lower"), Cow::Borrowed(_)));
        assert_eq!(fold_case("MiXeD"), "mixed");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Hello World", "O W"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("hello", "world"));
    }

    #[test]
    fn test_prefix_and_suffix() {
        assert!(starts_with_ignore_case("HelloWorld", "hello"));
        assert!(ends_with_ignore_case("HelloWorld", "WORLD"));
        assert!(!starts_with_ignore_case("HelloWorld", "world"));
        assert!(!ends_with_ignore_case("Hi", "Hi there"));
    }

    #[test]
    fn test_titlecase_letters_fold() {
        // U+01C5 is titlecase, not uppercase, and lowercases to U+01C6.
        assert_eq!(fold_case("\u{01C5}"), "\u{01C6}");
        assert!(contains_ignore_case("\u{01C5}", "\u{01C6}"));
        assert!(starts_with_ignore_case("\u{01C5}a", "\u{01C6}"));
        assert!(ends_with_ignore_case("a\u{01C5}", "\u{01C4}"));
        assert!(eq_ignore_case("\u{01C5}", "\u{01C6}"));
    }

    #[test]
    fn test_unicode_folding() {
        assert!(starts_with_ignore_case("ÄBC", "äb"));
        assert!(eq_ignore_case("Straße", "STRAßE"));
        assert!(!eq_ignore_case("abc", "abd"));
    }
}
