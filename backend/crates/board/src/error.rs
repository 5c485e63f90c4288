//! Board Error Types
//!
//! Domain-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Auth errors (Forbidden, Unauthorized)
//! pass through unchanged so ownership denials keep their semantics.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use auth::AuthError;

/// Board-specific result type alias
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-specific error variants
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Job not found")]
    JobNotFound,

    #[error("Employer not found")]
    EmployerNotFound,

    #[error("Candidate not found")]
    CandidateNotFound,

    #[error("Application not found")]
    ApplicationNotFound,

    #[error("Resume not found")]
    ResumeNotFound,

    #[error("Notification not found")]
    NotificationNotFound,

    /// Job creation by a user with no employer affiliation
    #[error("Employer profile required for job creation")]
    EmployerProfileRequired,

    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Role or ownership denial, token failure (propagated from auth)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BoardError::JobNotFound
            | BoardError::EmployerNotFound
            | BoardError::CandidateNotFound
            | BoardError::ApplicationNotFound
            | BoardError::ResumeNotFound
            | BoardError::NotificationNotFound => StatusCode::NOT_FOUND,
            BoardError::EmployerProfileRequired => StatusCode::FORBIDDEN,
            BoardError::Validation(_) => StatusCode::BAD_REQUEST,
            BoardError::Auth(e) => e.status_code(),
            BoardError::Database(_) | BoardError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::JobNotFound
            | BoardError::EmployerNotFound
            | BoardError::CandidateNotFound
            | BoardError::ApplicationNotFound
            | BoardError::ResumeNotFound
            | BoardError::NotificationNotFound => ErrorKind::NotFound,
            BoardError::EmployerProfileRequired => ErrorKind::Forbidden,
            BoardError::Validation(_) => ErrorKind::BadRequest,
            BoardError::Auth(e) => e.kind(),
            BoardError::Database(_) | BoardError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, delegating storage faults to the kernel mapping
    /// (unique/foreign-key violations become 409, not 500).
    pub fn into_app_error(self) -> AppError {
        match self {
            BoardError::Database(e) => AppError::from(e),
            BoardError::Auth(e) => e.into_app_error(),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BoardError::Database(e) => {
                tracing::error!(error = %e, "Board database error");
            }
            BoardError::Internal(msg) => {
                tracing::error!(message = %msg, "Board internal error");
            }
            BoardError::Auth(e) => {
                tracing::warn!(error = %e, "Authorization failure");
            }
            _ => {
                tracing::debug!(error = %self, "Board error");
            }
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
