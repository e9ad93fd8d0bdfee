use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Fallback for unmatched paths.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "resource not found" })),
    )
}
