// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule predicates.
//!
//! Each predicate tests one property of a single value. They never fail: a
//! value of the wrong type simply yields `false`.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    /// Local part, `@`, domain, `.`, remainder. None of the parts may
    /// contain whitespace or another `@`.
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Minimum number of digits in a phone number.
pub const PHONE_MIN_DIGITS: usize = 10;

/// Maximum number of digits in a phone number.
pub const PHONE_MAX_DIGITS: usize = 15;

/// Minimum length of a strong password (whitespace counts).
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Check that a value is meaningfully present.
///
/// Null is absent. Strings must contain something other than whitespace and
/// arrays must have at least one element. Any other value (including `0` and
/// `false`) counts as present.
pub fn is_required(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Check that a value looks like an email address.
///
/// This is a permissive syntactic check on the trimmed string, not RFC 5322
/// validation. It accepts some malformed addresses (`a@b.c.`) and rejects
/// some valid ones (quoted local parts containing spaces, IP-literal domains
/// without a dot).
pub fn is_email(value: &Value) -> bool {
    match value {
        Value::String(s) => EMAIL_PATTERN.is_match(s.trim()),
        _ => false,
    }
}

/// Check that a string has at least `min_len` characters after trimming.
///
/// Length counts `char`s (Unicode scalar values), not UTF-16 code units, so
/// a character outside the BMP such as an emoji counts once.
pub fn is_min_length(value: &Value, min_len: usize) -> bool {
    match value {
        Value::String(s) => s.trim().chars().count() >= min_len,
        _ => false,
    }
}

/// Check that a string holds a plausible phone number.
///
/// All non-digit characters are ignored; what remains must be between 10 and
/// 15 digits long.
pub fn is_phone(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            let digits = s.chars().filter(char::is_ascii_digit).count();
            (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
        }
        _ => false,
    }
}

/// Check that a string is a strong password.
///
/// At least 8 characters (untrimmed), with a lowercase letter, an uppercase
/// letter, a digit and a symbol. A symbol is anything outside `[A-Za-z0-9]`.
/// Length counts `char`s (Unicode scalar values), not UTF-16 code units.
pub fn is_strong_password(value: &Value) -> bool {
    let s = match value {
        Value::String(s) => s,
        _ => return false,
    };

    if s.chars().count() < PASSWORD_MIN_LENGTH {
        return false;
    }

    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = s.chars().any(|c| c.is_ascii_digit());
    let has_symbol = s.chars().any(|c| !c.is_ascii_alphanumeric());

    has_lower && has_upper && has_digit && has_symbol
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required() {
        assert!(!is_required(&Value::Null));
        assert!(!is_required(&json!("")));
        assert!(!is_required(&json!("  ")));
        assert!(is_required(&json!("x")));
        assert!(!is_required(&json!([])));
        assert!(is_required(&json!([1])));
        assert!(is_required(&json!(0)));
        assert!(is_required(&json!(false)));
        assert!(is_required(&json!({})));
    }

    #[test]
    fn test_email() {
        assert!(is_email(&json!("alice@example.com")));
        assert!(is_email(&json!("  alice@example.com  ")));
        assert!(!is_email(&json!("not-an-email")));
        assert!(!is_email(&json!("alice@example")));
        assert!(!is_email(&json!("al ice@example.com")));
        assert!(!is_email(&json!("a@b@example.com")));
        assert!(!is_email(&json!(42)));
        assert!(!is_email(&Value::Null));
    }

    #[test]
    fn test_min_length() {
        assert!(is_min_length(&json!("abcdefgh"), 8));
        assert!(!is_min_length(&json!("abc"), 8));
        assert!(is_min_length(&json!("  abcdefgh  "), 8));
        assert!(is_min_length(&json!(""), 0));
        assert!(!is_min_length(&json!(12345678), 8));
        // Counted in characters, not bytes
        assert!(!is_min_length(&json!("ééé"), 4));
    }

    #[test]
    fn test_phone() {
        assert!(is_phone(&json!("+1 (555) 123-4567")));
        assert!(is_phone(&json!("123456789012345")));
        assert!(!is_phone(&json!("1234567890123456")));
        assert!(!is_phone(&json!("123")));
        // Lower bound is 10 digits
        assert!(is_phone(&json!("555-123-4567")));
        assert!(!is_phone(&json!("555-123-456")));
        assert!(!is_phone(&json!(5551234567u64)));
    }

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password(&json!("Secur3$Pass!")));
        assert!(!is_strong_password(&json!("weak")));
        assert!(!is_strong_password(&json!("alllowercase1!")));
        assert!(!is_strong_password(&json!("NoDigitsHere!")));
        assert!(!is_strong_password(&json!("NoSymbol123")));
        assert!(!is_strong_password(&json!(["Secur3$Pass!"])));
    }

    #[test]
    fn test_strong_password_whitespace_counts() {
        // Space is both a symbol and part of the length
        assert!(is_strong_password(&json!("Ab1 cdef")));
        assert!(!is_strong_password(&json!("Ab1 cde")));
    }

    #[test]
    fn test_lengths_count_scalar_values() {
        // Each emoji is one char but two UTF-16 code units
        assert!(is_min_length(&json!("😀😀😀"), 3));
        assert!(!is_min_length(&json!("😀😀😀"), 4));
        assert!(!is_strong_password(&json!("Ab1😀😀😀😀")));
        assert!(is_strong_password(&json!("Ab1😀😀😀😀x")));
    }
}
