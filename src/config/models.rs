//! Configuration data structures for quas-utils.
//!
//! Each section holds the defaults for one helper family, so callers can tune
//! retries, page sizes and slug probing without touching call sites.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UtilsConfig {
    /// Retry wrapper defaults.
    #[serde(default)]
    pub retry: RetryConfig,

    /// Pagination defaults.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Slug generation settings.
    #[serde(default)]
    pub slug: SlugConfig,

    /// Logging and output format settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for `RetryPolicy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum attempts before the last error is returned.
    /// Default: `3`
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Fixed pause between attempts, in milliseconds.
    /// Default: `1000`
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Default: `10`
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

/// Settings for `generate_slug`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugConfig {
    /// Number of suffixed candidates tried once the base slug is taken.
    /// Default: `5`
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Whether suffixed candidates also carry a millisecond timestamp.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub add_timestamp: bool,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            add_timestamp: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults
fn default_retries() -> u32 {
    3
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_per_page() -> usize {
    10
}

fn default_max_attempts() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
