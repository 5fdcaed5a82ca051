//! Landing page handler.

use axum::response::IntoResponse;

use crate::web::views::IndexPage;

/// Title shown on the landing page.
const SITE_NAME: &str = "Url Shortener";

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexPage::new(SITE_NAME)
}
