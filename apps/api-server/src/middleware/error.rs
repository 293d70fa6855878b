//! Error handling - maps domain and store failures to structured
//! `{kind, message, status}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use pulse_shared::ErrorBody;
use std::fmt;

/// Application-level error type for handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => ErrorBody::not_found(detail),
            AppError::BadRequest(detail) => ErrorBody::validation(detail),
            AppError::Unauthorized => ErrorBody::unauthorized("User not authorized"),
            AppError::Conflict(detail) => ErrorBody::conflict(detail),
            AppError::Internal(detail) => {
                // Log internal errors; the response body stays generic.
                tracing::error!("Internal error: {}", detail);
                ErrorBody::internal()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<pulse_core::error::DomainError> for AppError {
    fn from(err: pulse_core::error::DomainError) -> Self {
        match err {
            pulse_core::error::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            pulse_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            pulse_core::error::DomainError::Conflict(msg) => AppError::Conflict(msg),
            pulse_core::error::DomainError::Unauthorized => AppError::Unauthorized,
            pulse_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<pulse_core::error::StoreError> for AppError {
    fn from(err: pulse_core::error::StoreError) -> Self {
        tracing::error!("Store error: {}", err);
        AppError::Internal("Store error".to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
