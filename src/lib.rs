// quas-utils - Small helpers for web services: datetimes, retry, timing, logging, slugs
// Author: kelexine (https://github.com/kelexine)

pub mod api;
pub mod cli;
pub mod config;
pub mod date_time;
pub mod decorators;
pub mod error;
pub mod misc;
pub mod utils;

pub use date_time::to_gmt1_or_none;
pub use decorators::{get_time, RetryPolicy};
pub use error::{Result, UtilsError};
