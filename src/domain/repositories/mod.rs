//! Repository trait definitions for the domain layer.
//!
//! - Traits define the storage contract
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! See `tests/repository_url_mapping.rs` for usage against SQLite.

pub mod url_mapping_repository;

pub use url_mapping_repository::UrlMappingRepository;

#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
