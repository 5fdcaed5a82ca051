//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CodeAllocator, RedirectResolver, ShortenService};
use crate::infrastructure::persistence::SqliteUrlMappingRepository;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteUrlMappingRepository>>,
    pub redirect_resolver: Arc<RedirectResolver<SqliteUrlMappingRepository>>,
    /// Public base for short links; `None` means use the request `Host`.
    pub base_url: Option<String>,
}

impl AppState {
    /// Wires both services over one repository.
    pub fn new(
        repository: Arc<SqliteUrlMappingRepository>,
        allocator: CodeAllocator,
        base_url: Option<String>,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone(), allocator)),
            redirect_resolver: Arc::new(RedirectResolver::new(repository)),
            base_url,
        }
    }
}
