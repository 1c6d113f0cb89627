//! JSON response envelopes shared by every handler.
//!
//! Both builders emit the same shape so clients can branch on `status`
//! without looking at the HTTP code:
//!
//! ```json
//! { "status": "success", "status_code": 200, "message": "...", "data": { } }
//! ```
//!
//! Author: kelexine (<https://github.com/kelexine>)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome marker carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Body of a success or error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    fn new(status: ResponseStatus, msg: &str, status_code: StatusCode, data: Option<Value>) -> Self {
        Self {
            status,
            status_code: status_code.as_u16(),
            message: msg.to_string(),
            data: data.filter(has_payload),
        }
    }
}

/// Empty objects, arrays and `null` are treated as "no data".
fn has_payload(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Creates a JSON failure response with the given status code.
///
/// # Arguments
///
/// * `msg` - Human readable error message.
/// * `status_code` - HTTP status sent with the response.
/// * `resp_data` - Optional extra payload, omitted when empty.
pub fn error_response(msg: &str, status_code: StatusCode, resp_data: Option<Value>) -> Response {
    let body = ApiResponse::new(ResponseStatus::Failed, msg, status_code, resp_data);
    (status_code, Json(body)).into_response()
}

/// Creates a JSON success response with the given status code.
pub fn success_response(msg: &str, status_code: StatusCode, resp_data: Option<Value>) -> Response {
    let body = ApiResponse::new(ResponseStatus::Success, msg, status_code, resp_data);
    (status_code, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_data_is_dropped() {
        let body = ApiResponse::new(ResponseStatus::Success, "ok", StatusCode::OK, Some(json!({})));
        assert!(body.data.is_none());

        let body = ApiResponse::new(ResponseStatus::Success, "ok", StatusCode::OK, Some(json!([])));
        assert!(body.data.is_none());

        let body = ApiResponse::new(ResponseStatus::Success, "ok", StatusCode::OK, Some(Value::Null));
        assert!(body.data.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let body = ApiResponse::new(
            ResponseStatus::Failed,
            "nope",
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(json!({"field": "email"})),
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "failed",
                "status_code": 422,
                "message": "nope",
                "data": {"field": "email"}
            })
        );
    }

    #[test]
    fn test_data_key_absent_without_payload() {
        let body = ApiResponse::new(ResponseStatus::Success, "done", StatusCode::CREATED, None);
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("data").is_none());
        assert_eq!(value["status"], "success");
        assert_eq!(value["status_code"], 201);
    }
}
