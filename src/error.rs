// src/error.rs
// Error types for the service and CLI surfaces. Rendering itself never fails.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::io;
use thiserror::Error;

/// Result type for builder operations
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Form edits
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: expected {expected}, found {found:?}")]
    InvalidFieldValue {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("Malformed override {0:?}: expected name=value")]
    MalformedOverride(String),

    // Configuration
    #[error("Invalid configuration value: {key} = {value}")]
    InvalidConfigValue { key: String, value: String },

    // General
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error was caused by caller input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::UnknownField(_)
                | AppError::InvalidFieldValue { .. }
                | AppError::MalformedOverride(_)
        )
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string(),
        }))
    }
}
