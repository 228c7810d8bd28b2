//! Numeric coercion and bounding helpers.
//!
//! Host records store numbers as JSON values that may be missing, fractional,
//! stringly-typed or outright garbage. Everything in here degrades to a valid
//! number instead of failing.

use serde_json::Value;

/// Bound `value` into `[lo, hi]`.
///
/// If the bounds are inverted the lower bound wins, so the result is never
/// below `lo`.
///
/// # Examples
///
/// ```
/// use onepiece_domain::common::clamp;
///
/// assert_eq!(clamp(7, 0, 5), 5);
/// assert_eq!(clamp(-3, 0, 5), 0);
/// assert_eq!(clamp(3, 0, 5), 3);
/// ```
pub fn clamp(value: i64, lo: i64, hi: i64) -> i64 {
    if hi < lo {
        return lo;
    }
    value.max(lo).min(hi)
}

/// Returns the value only if it is a finite JSON number.
///
/// Strings are not parsed here; use [`lenient_number`] for that.
pub fn finite_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| n.is_finite())
}

/// Coerce any JSON value into a finite number, defaulting to `0.0`.
///
/// Numbers pass through, numeric strings are parsed, booleans become 1/0.
/// Missing, null, non-numeric and non-finite values all become `0.0`.
pub fn lenient_number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Floor a float into an integer. Non-finite input becomes `0`.
pub fn floor_to_int(n: f64) -> i64 {
    if n.is_finite() {
        // `as` saturates at the i64 bounds
        n.floor() as i64
    } else {
        0
    }
}

/// [`lenient_number`] floored to an integer.
pub fn lenient_int(value: Option<&Value>) -> i64 {
    floor_to_int(lenient_number(value))
}

/// Format an integer with `,` thousands separators.
///
/// # Examples
///
/// ```
/// use onepiece_domain::common::group_thousands;
///
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// assert_eq!(group_thousands(-1000), "-1,000");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if value < 0 {
        format!("-{out}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clamp_bounds_value() {
        assert_eq!(clamp(10, 0, 5), 5);
        assert_eq!(clamp(-1, 0, 5), 0);
        assert_eq!(clamp(4, 0, 5), 4);
    }

    #[test]
    fn clamp_with_inverted_bounds_returns_lower() {
        assert_eq!(clamp(3, 5, 0), 5);
    }

    #[test]
    fn finite_number_rejects_strings_and_missing() {
        assert_eq!(finite_number(Some(&json!(6))), Some(6.0));
        assert_eq!(finite_number(Some(&json!("6"))), None);
        assert_eq!(finite_number(Some(&Value::Null)), None);
        assert_eq!(finite_number(None), None);
    }

    #[test]
    fn lenient_number_coerces_like_the_sheet_does() {
        assert_eq!(lenient_number(Some(&json!(2.5))), 2.5);
        assert_eq!(lenient_number(Some(&json!(" 12 "))), 12.0);
        assert_eq!(lenient_number(Some(&json!(""))), 0.0);
        assert_eq!(lenient_number(Some(&json!("abc"))), 0.0);
        assert_eq!(lenient_number(Some(&json!("NaN"))), 0.0);
        assert_eq!(lenient_number(Some(&json!("inf"))), 0.0);
        assert_eq!(lenient_number(Some(&json!(true))), 1.0);
        assert_eq!(lenient_number(Some(&json!({"value": 3}))), 0.0);
        assert_eq!(lenient_number(None), 0.0);
    }

    #[test]
    fn lenient_int_floors() {
        assert_eq!(lenient_int(Some(&json!(4.9))), 4);
        assert_eq!(lenient_int(Some(&json!(-0.5))), -1);
        assert_eq!(lenient_int(Some(&json!("7.2"))), 7);
    }

    #[test]
    fn group_thousands_formats() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(10000), "10,000");
        assert_eq!(group_thousands(1000000), "1,000,000");
        assert_eq!(group_thousands(-123456), "-123,456");
    }
}
