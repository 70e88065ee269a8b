//! Gateway errors and HTTP error bodies.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Wiring-time errors raised while building the route policy.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid HTTP method '{method}' in route binding for '{path}'")]
    InvalidMethod { method: String, path: String },

    #[error("failed to insert route pattern '{path}': {source}")]
    InvalidRoute {
        path: String,
        #[source]
        source: matchit::InsertError,
    },

    #[error("route {method} {path} is bound to unknown operation '{operation}'")]
    UnknownOperation {
        method: String,
        path: String,
        operation: String,
    },
}

/// JSON error body: `{"detail": "..."}`.
#[must_use]
pub fn problem(status: StatusCode, detail: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}
