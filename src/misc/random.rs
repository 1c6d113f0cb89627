// Random identifiers and numeric codes
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, UtilsError};
use rand::Rng;

const LETTERS_AND_DIGITS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LOWERCASE_AND_DIGITS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random ASCII alphanumeric string of `length` characters.
///
/// A non-empty `prefix` is joined with a dash: `generate_random_string(4, "ord", true)`
/// gives something like `"ord-x7k2"`.
pub fn generate_random_string(length: usize, prefix: &str, lowercase: bool) -> String {
    let charset = if lowercase {
        LOWERCASE_AND_DIGITS
    } else {
        LETTERS_AND_DIGITS
    };

    let mut rng = rand::rng();
    let random_part: String = (0..length)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect();

    if prefix.is_empty() {
        random_part
    } else {
        format!("{}-{}", prefix, random_part)
    }
}

/// Random number with exactly `length` decimal digits (no leading zero).
pub fn generate_random_number(length: u32) -> Result<u64> {
    if length < 1 {
        return Err(UtilsError::InvalidArgument(
            "Length must be greater than 0".to_string(),
        ));
    }
    // 10^20 no longer fits in a u64
    if length > 19 {
        return Err(UtilsError::InvalidArgument(format!(
            "Length must be at most 19, got {}",
            length
        )));
    }

    let low = 10u64.pow(length - 1);
    let high = 10u64.pow(length) - 1;
    Ok(rand::rng().random_range(low..=high))
}
