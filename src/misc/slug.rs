//! URL slugs that are unique within a backing store.
//!
//! The store is abstracted behind [`SlugSource`] so the same probing logic
//! works over a database table, a cache or an in-memory map in tests.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use super::random::generate_random_string;
use crate::config::SlugConfig;
use crate::error::{Result, UtilsError};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid slug regex"));

/// Length of the random part appended to a taken slug.
const SUFFIX_LENGTH: usize = 5;

/// Lookup of records by their slug column.
pub trait SlugSource {
    type Record;

    fn find_by_slug(&self, slug: &str) -> Result<Option<Self::Record>>;

    fn slug_exists(&self, slug: &str) -> Result<bool> {
        Ok(self.find_by_slug(slug)?.is_some())
    }
}

/// A record that owns a slug derived from its name.
pub trait Sluggable {
    fn name(&self) -> &str;
    fn slug(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    /// Suffixed candidates tried after the base slug; must be >= 1.
    pub max_attempts: u32,
    /// Append a millisecond timestamp to suffixed candidates.
    pub add_timestamp: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            add_timestamp: true,
        }
    }
}

impl From<&SlugConfig> for SlugOptions {
    fn from(config: &SlugConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            add_timestamp: config.add_timestamp,
        }
    }
}

/// Lowercase `text` and collapse every run of non-alphanumeric characters
/// into a single dash. Non-ASCII letters are kept as-is.
///
/// Apostrophes are dropped and digit-grouping commas removed first, so
/// `"Don't Stop 1,000"` becomes `dont-stop-1000`.
pub fn slugify(text: &str) -> String {
    let lowered = strip_quotes_and_digit_commas(text).to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

fn strip_quotes_and_digit_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| match c {
            '\'' | '\u{2019}' => false,
            ',' => {
                let digit_before = i > 0 && chars[i - 1].is_ascii_digit();
                let digit_after = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
                !(digit_before && digit_after)
            }
            _ => true,
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Produce a slug for `name` that no record in `source` uses yet.
///
/// When `existing` is the record being updated and its name did not change,
/// its current slug is returned without touching the store. Otherwise the
/// plain slug is tried first, then up to `max_attempts` candidates of the
/// form `<slug>-<random>[-<millis>]`.
pub fn generate_slug<S, R>(
    name: &str,
    source: &S,
    existing: Option<&R>,
    options: &SlugOptions,
) -> Result<String>
where
    S: SlugSource + ?Sized,
    R: Sluggable + ?Sized,
{
    if options.max_attempts < 1 {
        return Err(UtilsError::InvalidArgument(
            "max_attempts must be at least 1.".to_string(),
        ));
    }

    if let Some(obj) = existing {
        if obj.name() == name {
            return Ok(obj.slug().to_string());
        }
    }

    let base_slug = slugify(name);
    let timestamp = Utc::now().timestamp_millis();
    let mut slug = base_slug.clone();
    let mut counter = 1;

    while source.slug_exists(&slug)? {
        if counter > options.max_attempts {
            return Err(UtilsError::SlugExhausted {
                attempts: options.max_attempts,
            });
        }

        debug!("Slug '{}' taken, trying another ({}/{})", slug, counter, options.max_attempts);
        let suffix = generate_random_string(SUFFIX_LENGTH, "", true);
        slug = if options.add_timestamp {
            format!("{}-{}-{}", base_slug, suffix, timestamp)
        } else {
            format!("{}-{}", base_slug, suffix)
        };
        counter += 1;
    }

    Ok(slug)
}

/// Fetch the record with the given slug, if any.
pub fn get_object_by_slug<S>(source: &S, slug: &str) -> Result<Option<S::Record>>
where
    S: SlugSource + ?Sized,
{
    source.find_by_slug(slug)
}
