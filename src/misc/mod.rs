//! Miscellaneous helpers for request handlers and persistence code.
//!
//! # Submodules
//!
//! - `keys`: camelCase to snake_case conversion for JSON payloads.
//! - `parse`: lenient integer and boolean coercion.
//! - `random`: random strings and fixed-width numeric codes.
//! - `request`: pagination, redirects, URL splitting and `get_or_404`.
//! - `slug`: slug generation against a pluggable store.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod keys;
pub mod parse;
pub mod random;
pub mod request;
pub mod slug;

pub use keys::{normalize_keys, to_snake};
pub use parse::{int_or_none, int_or_none_value, parse_bool};
pub use random::{generate_random_number, generate_random_string};
pub use request::{
    get_or_404, page_from_query, paginate_results, redirect_target, redirect_url, url_parts,
    OneOrNone, PageParams,
};
pub use slug::{generate_slug, get_object_by_slug, slugify, SlugOptions, SlugSource, Sluggable};
