// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum AppError {
    /// A read against the store failed; `message` is what the caller sees.
    Query {
        message: &'static str,
        source: sqlx::Error,
    },
    NotFound(String),
}

impl AppError {
    pub fn query(message: &'static str, source: sqlx::Error) -> Self {
        AppError::Query { message, source }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Query { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Anything that stops the process before it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("unable to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("unable to ping database: {0}")]
    Ping(#[source] sqlx::Error),
    #[error("failed to create tables: {0}")]
    Schema(#[source] sqlx::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
