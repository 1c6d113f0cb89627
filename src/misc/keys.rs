// camelCase -> snake_case key normalization for JSON payloads
// Author: kelexine (https://github.com/kelexine)

use serde_json::{Map, Value};

/// Convert camelCase or PascalCase (acronyms included) to snake_case.
///
/// Words break between a lowercase letter or digit and an uppercase letter,
/// and inside an uppercase run right before its last capital when that
/// capital starts a lowercase word:
///
/// - `HTTPServerError` -> `http_server_error`
/// - `userID` -> `user_id`
/// - `firstName` -> `first_name`
pub fn to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            parts.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    parts.push(current);

    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    let lower_to_upper =
        (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && cur.is_ascii_uppercase();
    let acronym_end = prev.is_ascii_uppercase()
        && cur.is_ascii_uppercase()
        && next.is_some_and(|n| n.is_ascii_lowercase());
    lower_to_upper || acronym_end
}

/// Recursively rewrite every object key to snake_case.
///
/// Arrays are walked element by element; scalars come back unchanged. When
/// two source keys map to the same snake_case key, the later one wins.
pub fn normalize_keys(data: Value) -> Value {
    match data {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, value) in map {
                normalized.insert(to_snake(&key), normalize_keys(value));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}
