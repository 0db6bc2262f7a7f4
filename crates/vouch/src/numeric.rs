//! Numeric coercion and integer checks.

use vouch_core::{CheckKind, Override, Result, Value};

use crate::ensure::fail;

/// Coerces the value to a float the way a lenient parser reads user input.
///
/// Numbers pass through unless NaN. Every other present value is converted to
/// its string form and its longest numeric prefix is parsed, so `"123.123"`
/// yields `123.123` and `"12px"` yields `12`. Null, undefined and values
/// without a numeric prefix fail.
///
/// ```
/// use vouch::{is_number, Value};
///
/// assert_eq!(is_number(&Value::from("123"), None).unwrap(), 123.0);
/// assert!(is_number(&Value::from(""), None).is_err());
/// ```
pub fn is_number(value: &Value, message: impl Into<Override>) -> Result<f64> {
    let parsed = match value {
        Value::Undefined | Value::Null => None,
        Value::Number(number) => Some(*number),
        other => parse_float(&other.to_string()),
    };
    parsed.filter(|number| !number.is_nan()).ok_or_else(|| {
        fail(CheckKind::Number, message.into(), || {
            format!("Value [{value}] was not a number.")
        })
    })
}

/// Returns the number if it is a finite whole number of numeric type.
///
/// Numeric strings are rejected even when [`is_number`] would accept them.
pub fn is_integer(value: &Value, message: impl Into<Override>) -> Result<f64> {
    match value {
        Value::Number(number) if number.is_finite() && number.trunc() == *number => Ok(*number),
        _ => Err(fail(CheckKind::Integer, message.into(), || {
            format!("Value [{value}] was not an integer.")
        })),
    }
}

/// Parses the longest float literal at the start of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign followed by
/// `Infinity` or by digits with an optional fraction and exponent.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let infinity = if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(infinity);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::parse_float;

    #[test]
    fn parses_numeric_prefixes() {
        assert_eq!(parse_float("123"), Some(123.0));
        assert_eq!(parse_float("  -4.5e2xyz"), Some(-450.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("7."), Some(7.0));
        assert_eq!(parse_float("12px"), Some(12.0));
        assert_eq!(parse_float("1e"), Some(1.0));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("true"), None);
        assert_eq!(parse_float("[object Object]"), None);
    }
}
