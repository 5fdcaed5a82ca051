//! Handler for the shorten form.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::views::{ErrorPage, ShortenedPage};

/// Fallback base when neither `BASE_URL` nor a `Host` header is available.
const FALLBACK_HOST: &str = "localhost";

/// Shown when the database fails while creating a link.
const SHORTEN_FAILED: &str = "Failed to create shortened URL";

/// Form body of `POST /shorten`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    /// A missing field is treated like an empty one and rejected as invalid.
    #[serde(default)]
    pub url: String,
}

/// Shortens the submitted URL and renders the result page.
///
/// # Endpoint
///
/// `POST /shorten` with form field `url`
///
/// # Responses
///
/// - **200 OK** with the short link page
/// - **200 OK** with the error page if the URL is invalid
/// - **500 Internal Server Error** with the error page if no code could be
///   allocated or the database failed
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    let base = public_base(&state, &headers);

    match state.shorten_service.shorten(&form.url, &base).await {
        Ok(link) => Ok(ShortenedPage::new(link.short_url, link.original_url).into_response()),
        Err(e @ AppError::StorageUnavailable { .. }) => {
            tracing::error!(error = %e, "Failed to store short link");
            Ok((StatusCode::INTERNAL_SERVER_ERROR, ErrorPage::new(SHORTEN_FAILED)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Picks the base for short links: configured `BASE_URL` first, then the
/// request's `Host` header.
fn public_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(ref base_url) = state.base_url {
        return base_url.clone();
    }

    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or(FALLBACK_HOST)
        .to_string()
}
