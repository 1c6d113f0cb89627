// JSON response envelope tests
// Author: kelexine (https://github.com/kelexine)

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quas_utils::api::{error_response, success_response};
use quas_utils::error::UtilsError;
use serde_json::{json, Value};

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_success_response_with_data() {
    let response = success_response("Created", StatusCode::CREATED, Some(json!({"id": 9})));
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "success",
            "status_code": 201,
            "message": "Created",
            "data": {"id": 9}
        })
    );
}

#[tokio::test]
async fn test_error_response_without_data() {
    let response = error_response("Invalid input", StatusCode::BAD_REQUEST, None);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "failed");
    assert_eq!(body["status_code"], 400);
    assert_eq!(body["message"], "Invalid input");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_empty_data_is_omitted() {
    let response = success_response("Nothing", StatusCode::OK, Some(json!({})));
    let body = body_json(response).await;
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_not_found_error_renders_404() {
    let response = UtilsError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["status"], "failed");
    assert_eq!(body["status_code"], 404);
}

#[tokio::test]
async fn test_invalid_argument_renders_400() {
    let response = UtilsError::InvalidArgument("page".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_storage_error_renders_500() {
    let response = UtilsError::Storage("connection reset".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("connection reset"));
}
