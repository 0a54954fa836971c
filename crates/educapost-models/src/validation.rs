//! Field helpers shared by the payload validators.
//!
//! Request bodies arrive as loosely typed JSON. A string field holding a
//! number, an object or `null` is treated as an empty string, so the
//! validators report "is required" style messages instead of rejecting the
//! body outright.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// String value, untrimmed. Non-strings become `""`.
pub fn string_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// String value with surrounding whitespace removed.
pub fn trimmed_field(value: Option<&Value>) -> String {
    string_field(value).trim().to_string()
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Coerces a JSON number or numeric string to a positive 32-bit id.
///
/// Integral floats (`3.0`) and padded strings (`" 4 "`) are accepted.
/// Booleans, arrays, objects, fractions, zero and negatives are not.
pub fn positive_int(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if n.is_finite() && n.fract() == 0.0 && n >= 1.0 && n <= f64::from(i32::MAX) {
        Some(n as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_strings_are_empty() {
        assert_eq!(string_field(None), "");
        assert_eq!(string_field(Some(&json!(null))), "");
        assert_eq!(string_field(Some(&json!(42))), "");
        assert_eq!(string_field(Some(&json!(["a"]))), "");
        assert_eq!(trimmed_field(Some(&json!("  hi  "))), "hi");
        assert_eq!(string_field(Some(&json!("  hi  "))), "  hi  ");
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("Olá"), 3);
        assert_eq!("Olá".len(), 4);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("professor@educapost.dev"));
        assert!(is_valid_email("a.b+c@d.e.f"));
        assert!(!is_valid_email("professor"));
        assert!(!is_valid_email("professor@educapost"));
        assert!(!is_valid_email("prof essor@educapost.dev"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn test_positive_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(positive_int(&json!(3)), Some(3));
        assert_eq!(positive_int(&json!(3.0)), Some(3));
        assert_eq!(positive_int(&json!("12")), Some(12));
        assert_eq!(positive_int(&json!(" 4 ")), Some(4));
        assert_eq!(positive_int(&json!(2147483647)), Some(i32::MAX));
    }

    #[test]
    fn test_positive_int_rejects_everything_else() {
        assert_eq!(positive_int(&json!(0)), None);
        assert_eq!(positive_int(&json!(-1)), None);
        assert_eq!(positive_int(&json!(1.5)), None);
        assert_eq!(positive_int(&json!("abc")), None);
        assert_eq!(positive_int(&json!("")), None);
        assert_eq!(positive_int(&json!(true)), None);
        assert_eq!(positive_int(&json!([1])), None);
        assert_eq!(positive_int(&json!({"id": 1})), None);
        assert_eq!(positive_int(&json!(2147483648_i64)), None);
    }
}
