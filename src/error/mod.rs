// Error types for quas-utils
// Author: kelexine (https://github.com/kelexine)

use crate::api::http_response::error_response;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid format string: {0}")]
    InvalidFormat(String),

    #[error("Datetime parse error: {0}")]
    Parse(#[from] chrono::ParseError),

    #[error("Resource not found")]
    NotFound,

    #[error("Unable to create a unique slug after {attempts} attempts.")]
    SlugExhausted { attempts: u32 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),
}

// Convert UtilsError to the standard failure envelope for Axum
impl IntoResponse for UtilsError {
    fn into_response(self) -> Response {
        let status = match self {
            UtilsError::NotFound => StatusCode::NOT_FOUND,
            UtilsError::InvalidArgument(_) | UtilsError::InvalidFormat(_) | UtilsError::Parse(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(&self.to_string(), status, None)
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;
