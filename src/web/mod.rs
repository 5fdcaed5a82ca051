//! Browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`views`] - Templates and the view-model record

pub mod handlers;
pub mod views;
