//! # Shortcode
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate is split into layers:
//!
//! - **Domain Layer** ([`domain`]) - The URL mapping entity and the store trait
//! - **Application Layer** ([`application`]) - Code allocation, shortening and
//!   redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//! - **API Layer** ([`api`]) - Redirect and health handlers, request tracing
//! - **Web Layer** ([`web`]) - Landing page and shorten form
//!
//! ## Short Codes
//!
//! Codes are the base-62 encoding (`0-9a-zA-Z`) of an in-memory counter that
//! starts at 100000 and advances by 50000 per candidate, so the first codes
//! are `q0U`, `D1m`, `Q1O`. The unique index on `short_code` is the source of
//! truth: candidates that collide are skipped, up to a bounded number of
//! attempts.
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_PATH=./data/database.db   # optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;
