//! Cross-cutting helpers for quas-utils.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization plus the `console_log` and
//!   `log_exception` wrappers with a stdout fallback.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;

pub use logging::{console_log, log_exception};
