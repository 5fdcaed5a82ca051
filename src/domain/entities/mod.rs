//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted short code to long URL mapping
//! - [`NewUrlMapping`] - Input for creating a mapping (no `id` yet)

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
