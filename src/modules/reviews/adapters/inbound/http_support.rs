// Shared pieces of the HTTP inbound adapters: the authorization signal, body
// decoding and the mapping of application errors onto responses.

use axum::{
    Json,
    body::Bytes,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::modules::reviews::use_cases::errors::ApplicationError;

/// True when the caller presented credentials. Verifying them is the job of
/// whatever sits in front of the service.
pub fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| !value.trim().is_empty())
}

/// Decodes an optional JSON body. An empty body is `None`.
pub fn json_body(bytes: &Bytes) -> Result<Option<Value>, ApplicationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|e| ApplicationError::BadRequest(format!("Request body is not valid JSON: {e}")))
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::BadRequest(message) => {
                tracing::warn!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApplicationError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Unauthorized" })),
            )
                .into_response(),
            ApplicationError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApplicationError::Validation(failure) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Incorrect type. Must match MovieReview schema",
                    "errors": failure.errors,
                    "schema": failure.schema,
                })),
            )
                .into_response(),
            ApplicationError::Internal(error) => {
                tracing::error!(%error, "operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
