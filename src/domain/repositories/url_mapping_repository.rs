//! Repository trait for short code mappings.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable, uniqueness-enforcing storage of [`UrlMapping`] records.
///
/// Implementations must be safe for concurrent use. Uniqueness of
/// `short_code` is enforced by the storage engine itself, so two racing
/// inserts of the same code produce exactly one row and one
/// [`AppError::DuplicateCode`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Creates the backing schema if it is absent. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn init(&self) -> Result<(), AppError>;

    /// Persists a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the short code is already bound.
    /// This is the authoritative collision signal.
    ///
    /// Returns [`AppError::StorageUnavailable`] on any other database error.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Advisory existence check.
    ///
    /// Not atomic with [`Self::insert`]; callers must still handle
    /// [`AppError::DuplicateCode`].
    async fn exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Returns the long URL bound to `short_code`, if any.
    async fn lookup(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Returns the full mapping for `short_code`, if any.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;
}
