//! Application error taxonomy.
//!
//! Every storage and validation failure is translated into one of these kinds
//! before it reaches the presentation layer. The [`IntoResponse`] impl renders
//! the error view with a user-facing message; the underlying cause is only
//! ever written to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::web::views::ErrorPage;

/// Errors produced by the shortening and redirect core.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted long URL is not a syntactically valid absolute URI.
    #[error("Invalid URL: {reason}")]
    InvalidInput { reason: String },

    /// The unique constraint on `short_code` rejected an insert.
    ///
    /// Recovered by the allocator's retry loop and never rendered.
    #[error("Short code '{code}' is already taken")]
    DuplicateCode { code: String },

    /// The allocator ran out of attempts without committing a code.
    #[error("Failed to allocate a unique short code after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    /// No mapping exists for the requested code.
    #[error("No URL is mapped to '{code}'")]
    NotFound { code: String },

    /// I/O or connection failure in the backing store.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },
}

impl AppError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::StorageUnavailable {
            message: err.to_string(),
        }
    }

    /// HTTP status used when the error is rendered.
    ///
    /// Invalid input is shown inline on a normal page, so it keeps `200 OK`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::OK,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::DuplicateCode { .. }
            | AppError::AllocationExhausted { .. }
            | AppError::StorageUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the end user. Never includes the underlying cause.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "Invalid URL provided",
            AppError::NotFound { .. } => "404 Not Found",
            AppError::DuplicateCode { .. }
            | AppError::AllocationExhausted { .. }
            | AppError::StorageUnavailable { .. } => "Something unexpected happened",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::storage(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidInput { reason } => {
                tracing::debug!(%reason, "Rejected long URL");
            }
            AppError::NotFound { code } => {
                tracing::debug!(%code, "Short code not found");
            }
            other => {
                tracing::error!(error = %other, "Request failed");
            }
        }

        (self.status_code(), ErrorPage::new(self.user_message())).into_response()
    }
}
