//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteUrlMappingRepository`] - Short code mapping storage and lookup

pub mod sqlite_url_mapping_repository;

pub use sqlite_url_mapping_repository::SqliteUrlMappingRepository;
