//! Domain layer containing the persisted entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the web layer or on a concrete
//! database. Allocation and resolution logic lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
