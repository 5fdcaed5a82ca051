//! Business logic services for the application layer.

pub mod code_allocator;
pub mod redirect_resolver;
pub mod shorten_service;

pub use code_allocator::CodeAllocator;
pub use redirect_resolver::RedirectResolver;
pub use shorten_service::{ShortenService, ShortenedLink};
