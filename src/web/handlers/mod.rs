//! HTML page handlers.

mod index;
mod shorten;

pub use index::index_handler;
pub use shorten::shorten_handler;
