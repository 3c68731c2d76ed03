//! Error types for Socialite services

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DialogError>;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("User ID header required")]
    AuthMissing,

    #[error("{0}")]
    Validation(String),

    #[error("Dialog service unavailable")]
    Unavailable,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DialogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthMissing => StatusCode::UNAUTHORIZED,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::AuthMissing => "AUTH_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unavailable => "UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// Every failure path answers the caller with an explicit JSON body.
impl IntoResponse for DialogError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

impl From<std::io::Error> for DialogError {
    fn from(err: std::io::Error) -> Self {
        DialogError::Network(err.to_string())
    }
}
