//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored URL
/// - **404 Not Found** with the error page if the code is unknown
/// - **500 Internal Server Error** with the error page on database errors
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.redirect_resolver.resolve(&code).await?;

    Ok(found(&long_url))
}

/// Builds a `302 Found` response.
///
/// Stored URLs are kept verbatim and may contain non-ASCII characters;
/// those are sent in their percent-encoded form.
fn found(long_url: &str) -> Response {
    let verbatim = if long_url.is_ascii() {
        HeaderValue::from_str(long_url).ok()
    } else {
        None
    };

    let location = verbatim.or_else(|| {
        Url::parse(long_url)
            .ok()
            .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
    });

    match location {
        Some(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        None => {
            tracing::error!(%long_url, "Stored URL cannot be sent as a Location header");
            AppError::storage("unencodable redirect target").into_response()
        }
    }
}
