use axum::http::StatusCode;
use serde_json::json;

use crate::app::errors;

pub async fn health() -> axum::response::Response {
    errors::json_success(StatusCode::OK, json!({ "ok": true }), None)
}

/// Fallback for paths outside the routing tree.
pub async fn route_not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Route not found", None)
}
