//! Call wrappers that stand in for function decorators.
//!
//! - `retry`: fixed-delay re-invocation of fallible operations.
//! - `timing`: elapsed-time logging around a call.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod retry;
pub mod timing;

pub use retry::RetryPolicy;
pub use timing::{get_time, get_time_async};
