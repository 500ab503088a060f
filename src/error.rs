use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::panic::Location;
use thiserror::Error;
use tracing::error;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {source}")]
    Database {
        source: sqlx::Error,
        location: &'static Location<'static>,
    },
    #[error("Invalid input: {}", .0.join(" "))]
    Validation(Vec<String>),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal server error: {message}")]
    Internal {
        message: String,
        location: &'static Location<'static>,
    },
}

// `?` on a sqlx result records the line it was raised from.
impl From<sqlx::Error> for AppError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        AppError::Database {
            source,
            location: Location::caller(),
        }
    }
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
            location: Location::caller(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database { .. } | AppError::Config(_) | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Renders the error body. Server-side failures include `file` and `line`
    /// only when `expose_diagnostics` is set; they are always logged.
    pub fn render(&self, expose_diagnostics: bool) -> Response {
        let (message, location) = match self {
            AppError::Validation(messages) => {
                return (self.status(), Json(json!({ "error": messages }))).into_response();
            }
            AppError::Database { source, location } => {
                error!(file = location.file(), line = location.line(), "Database error: {:?}", source);
                (source.to_string(), Some(*location))
            }
            AppError::Internal { message, location } => {
                error!(file = location.file(), line = location.line(), "Internal error: {}", message);
                (message.clone(), Some(*location))
            }
            AppError::Config(msg) => {
                error!("Configuration error: {}", msg);
                (msg.clone(), None)
            }
        };

        let body = match (expose_diagnostics, location) {
            (true, Some(loc)) => json!({
                "error": message,
                "file": loc.file(),
                "line": loc.line(),
            }),
            (true, None) => json!({ "error": message }),
            (false, _) => json!({ "error": "Internal server error" }),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// An [`AppError`] bound to the deployment's diagnostics policy.
#[derive(Debug)]
pub struct ApiError {
    pub error: AppError,
    pub expose_diagnostics: bool,
}

impl ApiError {
    pub fn new(error: AppError, config: &Config) -> Self {
        Self {
            error,
            expose_diagnostics: config.expose_diagnostics,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.error.render(self.expose_diagnostics)
    }
}
