use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    UpstreamError(reqwest::Error),
    InvalidResponse(String),
    ConfigError(String),
    NotFound(String),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UpstreamError(e) => write!(f, "Upstream API error: {}", e),
            AppError::InvalidResponse(msg) => write!(f, "Invalid upstream response: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl AppError {
    /// Short text safe to show inside a rendered page.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::UpstreamError(_) | AppError::InvalidResponse(_) => {
                "The marketplace service is unavailable right now"
            }
            AppError::NotFound(_) => "Not found",
            AppError::BadRequest(_) => "Invalid request",
            AppError::ConfigError(_) => "Something went wrong",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UpstreamError(ref e) => {
                tracing::error!("Upstream API error: {:?}", e);
                (StatusCode::BAD_GATEWAY, "Marketplace API request failed")
            }
            AppError::InvalidResponse(ref msg) => {
                tracing::error!("Invalid upstream response: {}", msg);
                (StatusCode::BAD_GATEWAY, "Marketplace API returned an invalid response")
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error",
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
        };

        let body = Json(json!({
            "message": error_message,
        }));

        (status, body).into_response()
    }
}
