//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Landing page with the shorten form
//! - `POST /shorten`      - Create a short link (form field `url`)
//! - `GET  /health`       - Health check (JSON)
//! - `GET  /favicon.ico`  - Favicon from the images directory
//! - `/images/*`          - Image assets
//! - `/static/*`          - Stylesheet and script
//! - `GET  /{code}`       - Short link redirect
//!
//! Fixed routes win over `/{code}`; the allocator never hands out their
//! names as codes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::{index_handler, shorten_handler};
use axum::Router;
use axum::routing::{get, get_service, post};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Locations of on-disk assets.
#[derive(Debug, Clone)]
pub struct AssetDirs {
    pub static_dir: String,
    pub images_dir: String,
}

impl Default for AssetDirs {
    fn default() -> Self {
        Self {
            static_dir: "static".to_string(),
            images_dir: "images".to_string(),
        }
    }
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, assets: &AssetDirs) -> Router {
    let favicon = Path::new(&assets.images_dir).join("favicon.ico");

    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/favicon.ico", get_service(ServeFile::new(favicon)))
        .nest_service("/images", ServeDir::new(&assets.images_dir))
        .nest_service("/static", ServeDir::new(&assets.static_dir))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
