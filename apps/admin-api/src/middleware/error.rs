//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use pressroom_core::error::{DomainError, FieldViolation, RepoError};
use pressroom_shared::ErrorResponse;
use pressroom_shared::response::FieldViolationDto;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Validation(Vec<FieldViolation>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Validation(violations) => {
                write!(f, "Validation failed: {} violation(s)", violations.len())
            }
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail.clone()),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail.clone()),
            AppError::Conflict(detail) => {
                ErrorResponse::new(409, "Conflict").with_detail(detail.clone())
            }
            AppError::Validation(violations) => {
                let violations = violations
                    .iter()
                    .map(|violation| FieldViolationDto {
                        field: violation.field.to_string(),
                        message: violation.message.clone(),
                    })
                    .collect();
                ErrorResponse::validation_failed(violations)
            }
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PostNotFound { slug } => {
                AppError::NotFound(format!("post with slug `{slug}` not found"))
            }
            DomainError::Validation(violations) => AppError::Validation(violations),
            DomainError::Storage(err) => AppError::Internal(format!("blob storage: {err}")),
            DomainError::Repo(err) => match err {
                RepoError::NotFound => AppError::NotFound("resource not found".to_string()),
                RepoError::Constraint(msg) => AppError::Conflict(msg),
                RepoError::Query(msg) => AppError::Internal(format!("repository: {msg}")),
            },
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
