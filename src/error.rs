// src/error.rs

//! Unified error handling for the mirror service.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result type alias for mirror operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The `u` query parameter is missing or empty
    #[error("missing url parameter")]
    MissingParameter,

    /// The requested URL failed the safety filter
    #[error("unsafe url")]
    UnsafeUrl,

    /// Navigation, timeout, or engine failure while fetching a page
    #[error("page fetch failed: {0}")]
    FetchFailed(String),

    /// The page code is not 12 lowercase hex characters
    #[error("invalid page code")]
    InvalidCode,

    /// No stored record for the page code
    #[error("page not found")]
    NotFound,

    /// Rendering engine error
    #[error("render error: {0}")]
    Render(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a fetch failure carrying the underlying message.
    pub fn fetch_failed(message: impl fmt::Display) -> Self {
        Self::FetchFailed(message.to_string())
    }

    /// Create a rendering engine error.
    pub fn render(message: impl fmt::Display) -> Self {
        Self::Render(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// HTTP boundary mapping.
///
/// `/fetch` errors are JSON (`{error}` or `{error, details}`); the page
/// serving route answers with small HTML bodies instead.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidCode => {
                (StatusCode::BAD_REQUEST, Html("<h1>Invalid page code</h1>")).into_response()
            }
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Html("<h1>Page not found</h1>")).into_response()
            }
            AppError::MissingParameter | AppError::UnsafeUrl => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AppError::FetchFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "page fetch failed", "details": details })),
            )
                .into_response(),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error", "details": other.to_string() })),
            )
                .into_response(),
        }
    }
}
