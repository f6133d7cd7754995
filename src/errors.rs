use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::common::domain_error::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, received: String },

    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    #[error("Invalid username or password")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Store error")]
    StoreError(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message, received } => {
                AppError::Validation { message, received }
            }
            DomainError::NotFound(what) => AppError::NotFound(what.to_string()),
            DomainError::InvalidCredentials => AppError::Unauthorized,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BodyParsingError(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BodyParsingError(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<DomainError>() {
            Ok(domain) => return domain.into(),
            Err(err) => err,
        };
        match err.downcast::<validator::ValidationErrors>() {
            Ok(validation) => AppError::BodyParsingError(validation.to_string()),
            Err(err) => AppError::StoreError(format!("{err:#}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AppError::Validation { message, received } => json!({
                "error": message,
                "received": received,
            }),
            AppError::StoreError(detail) => {
                error!(error = %detail, "Request failed");
                json!({ "error": self.to_string() })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
