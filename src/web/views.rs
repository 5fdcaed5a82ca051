//! Askama views and the view-model record they render.
//!
//! Handlers never format HTML themselves; they fill a [`PageData`] and hand
//! it to one of the page templates below. All pages extend
//! `templates/base.html`.

use askama::Template;
use askama_web::WebTemplate;

/// Data record shared by every view.
///
/// Empty strings mean "not present" and are skipped by the templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageData {
    pub name: String,
    pub shortened_url: String,
    pub original_url: String,
    pub error: String,
}

/// Landing page with the shorten form.
///
/// Renders `templates/index.html`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub page: PageData,
}

impl IndexPage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            page: PageData {
                name: name.into(),
                ..PageData::default()
            },
        }
    }
}

/// Result page showing the short link next to the original URL.
///
/// Renders `templates/shorten.html`.
#[derive(Template, WebTemplate)]
#[template(path = "shorten.html")]
pub struct ShortenedPage {
    pub page: PageData,
}

impl ShortenedPage {
    pub fn new(shortened_url: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            page: PageData {
                shortened_url: shortened_url.into(),
                original_url: original_url.into(),
                ..PageData::default()
            },
        }
    }
}

/// Error page with a user-facing message.
///
/// Renders `templates/error.html`. The HTTP status is chosen by the caller.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub page: PageData,
}

impl ErrorPage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            page: PageData {
                error: message.into(),
                ..PageData::default()
            },
        }
    }
}
