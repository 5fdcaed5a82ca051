//! Helpers used across the application:
//!
//! - [`base62`] - Seed to short code encoding
//! - [`code_generator`] - Candidate short code sources
//! - [`url_validator`] - Long URL validation
//! - [`db_error`] - Database error classification

pub mod base62;
pub mod code_generator;
pub mod db_error;
pub mod url_validator;
