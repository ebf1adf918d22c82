use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use stockroom_core::DomainError;

/// Wrap a payload in the success envelope:
/// `{"status": "success", "message"?, "data"}`.
pub fn json_success(
    status: StatusCode,
    data: Value,
    message: Option<&str>,
) -> axum::response::Response {
    let mut body = json!({
        "status": "success",
        "data": data,
    });
    if let Some(message) = message {
        body["message"] = json!(message);
    }
    (status, Json(body)).into_response()
}

/// Wrap an error in the error envelope:
/// `{"status": "error", "error": {"code", "message", "details"?}}`.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
    details: Option<Value>,
) -> axum::response::Response {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(details) = details {
        error["details"] = details;
    }

    (status, Json(json!({ "status": "error", "error": error }))).into_response()
}

/// Map a domain failure onto the envelope and its HTTP status.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation { message, details } => {
            json_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, details)
        }
        DomainError::NotFound(message) => {
            json_error(StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
        }
        DomainError::Duplicate(message) => {
            json_error(StatusCode::CONFLICT, "DUPLICATE", message, None)
        }
        DomainError::VersionConflict(message) => {
            json_error(StatusCode::CONFLICT, "VERSION_CONFLICT", message, None)
        }
        DomainError::InvalidState(message) => {
            json_error(StatusCode::BAD_REQUEST, "INVALID_STATE", message, None)
        }
        DomainError::Internal(message) => {
            tracing::error!("unhandled internal error: {message}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Unhandled server error",
                None,
            )
        }
    }
}
