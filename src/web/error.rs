// src/web/error.rs
// JSON error responses for the API routes

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::error::CompletionError;

#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: Some("INTERNAL_ERROR".to_string()),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: Some("BAD_REQUEST".to_string()),
        }
    }

    /// The upstream completions API failed
    pub fn bad_gateway(message: impl Into<String>, error_code: &str) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_GATEWAY,
            error_code: Some(error_code.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        let code = match &err {
            CompletionError::Auth(_) => "UPSTREAM_AUTH",
            CompletionError::Network(_) => "UPSTREAM_NETWORK",
            CompletionError::RateLimited(_) => "UPSTREAM_RATE_LIMITED",
            CompletionError::Api { .. } => "UPSTREAM_ERROR",
            CompletionError::MalformedResponse(_) => "UPSTREAM_MALFORMED",
        };
        ApiError::bad_gateway(err.to_string(), code)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(err: minijinja::Error) -> Self {
        tracing::error!(error = %err, "Template rendering failed");
        ApiError::internal("failed to render page")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
