//! Application layer services.
//!
//! Services consume the repository trait and give the web layer a small API.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Collision-safe short code allocation
//! - [`services::shorten_service::ShortenService`] - Validation and link creation
//! - [`services::redirect_resolver::RedirectResolver`] - Code to target URL lookup

pub mod services;
