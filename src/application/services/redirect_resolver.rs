//! Read-only resolution of short codes.

use std::sync::Arc;

use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

/// Translates a short code into its redirect target.
///
/// The stored URL is returned as-is; it was validated once, at creation.
pub struct RedirectResolver<R: UrlMappingRepository> {
    repository: Arc<R>,
}

impl<R: UrlMappingRepository> RedirectResolver<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves `code` to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .lookup(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }
}
