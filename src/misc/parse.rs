// Lenient coercion of request values
// Author: kelexine (https://github.com/kelexine)

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Optional sign, digits, single underscores allowed between digits
static INTEGER_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9](?:_?[0-9])*$").expect("valid integer regex"));

/// Parse an integer, returning `None` instead of an error.
///
/// Surrounding whitespace is ignored and `_` digit separators are accepted,
/// so `" -1_000 "` parses to `-1000`.
pub fn int_or_none(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    if !INTEGER_LITERAL.is_match(trimmed) {
        return None;
    }
    trimmed.replace('_', "").parse().ok()
}

/// Integer coercion for JSON values: floats truncate toward zero,
/// booleans become 0/1 and strings go through [`int_or_none`].
pub fn int_or_none_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => int_or_none(s),
        _ => None,
    }
}

/// `true`, `1` and `yes` (any case) are true; everything else is false.
pub fn parse_bool(value: Option<&str>) -> bool {
    match value {
        Some(v) if !v.is_empty() => matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    }
}
