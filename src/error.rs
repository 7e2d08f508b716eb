use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the quant calculators and market generators.
///
/// Every failure is a caller input problem; nothing here is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),
}

impl QuantError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        QuantError::InvalidInput(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        QuantError::NumericOverflow(msg.into())
    }
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Quant(#[from] QuantError),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Quant(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::SerdeJson(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Anyhow(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
