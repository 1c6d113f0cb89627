// HTTP helpers for axum handlers
// Author: kelexine (https://github.com/kelexine)

pub mod http_response;

pub use http_response::{error_response, success_response, ApiResponse, ResponseStatus};
