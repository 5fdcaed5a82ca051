//! Redirect and health endpoints.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for JSON responses
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request logging middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
