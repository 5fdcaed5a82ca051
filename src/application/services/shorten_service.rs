//! Link shortening, the only write path.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::services::CodeAllocator;
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::url_validator::validate_long_url;

/// Result of a successful shorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub code: String,
    /// `<base>/<code>`, where base is the public host or configured base URL.
    pub short_url: String,
    pub original_url: String,
}

/// Validates long URLs, allocates codes and persists mappings.
pub struct ShortenService<R: UrlMappingRepository> {
    repository: Arc<R>,
    allocator: CodeAllocator,
}

impl<R: UrlMappingRepository> ShortenService<R> {
    pub fn new(repository: Arc<R>, allocator: CodeAllocator) -> Self {
        Self {
            repository,
            allocator,
        }
    }

    /// Shortens `long_url`, building the short link on top of `base`.
    ///
    /// The URL is stored exactly as given. Exactly one mapping is written on
    /// success and none on failure.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `long_url` is not an absolute URI.
    /// Returns [`AppError::AllocationExhausted`] if no free code was found.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    pub async fn shorten(&self, long_url: &str, base: &str) -> Result<ShortenedLink, AppError> {
        validate_long_url(long_url).map_err(|e| AppError::invalid_input(e.to_string()))?;

        let mapping = self
            .allocator
            .allocate(self.repository.as_ref(), long_url, Utc::now())
            .await?;

        info!(code = %mapping.short_code, id = mapping.id, "Created short link");

        Ok(ShortenedLink {
            short_url: Self::short_url(base, &mapping.short_code),
            code: mapping.short_code,
            original_url: mapping.long_url,
        })
    }

    /// Number of stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Joins a public base and a code.
    ///
    /// The base is used as given, with or without a scheme.
    pub fn short_url(base: &str, code: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), code)
    }
}
