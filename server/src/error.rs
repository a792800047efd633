//! Error types for the API forwarder.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures that prevent a backend response from reaching the browser.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The backend could not be reached, or the connection failed mid-response.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "api forward failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
