//! Lenient integer parsing for query strings and path segments.

/// Parses the leading integer of `raw`, ignoring anything after the digits.
///
/// Leading whitespace and one sign character are accepted, so `" 42"`,
/// `"+7"`, `"3abc"` and `"2.9"` yield 42, 7, 3 and 2. Returns `None` when no
/// digit follows the optional sign. Values past the `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    seen_digit.then_some(value)
}

/// Parses a resource id from a path segment.
///
/// Ids are positive 32-bit integers; anything else (no digits, zero,
/// negative, out of range) is rejected.
pub fn parse_id(raw: &str) -> Option<i32> {
    parse_leading_int(raw)
        .filter(|id| *id > 0)
        .and_then(|id| i32::try_from(id).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("0"), Some(0));
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(parse_leading_int("3abc"), Some(3));
        assert_eq!(parse_leading_int("2.9"), Some(2));
        assert_eq!(parse_leading_int("  12 "), Some(12));
        assert_eq!(parse_leading_int("1e3"), Some(1));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(" + 1"), None);
        assert_eq!(parse_leading_int("NaN"), None);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("15-intro"), Some(15));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("2147483647"), Some(i32::MAX));
        assert_eq!(parse_id("2147483648"), None);
    }
}
