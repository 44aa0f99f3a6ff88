//! Core rendering abstractions for invoice PDF generation.
//!
//! This crate provides the pieces shared by drawing backends:
//! - `DocumentRenderer` trait, a stateful page/text drawing builder
//! - `paint_page`, which replays a laid out page onto any renderer
//! - Error types for rendering operations
//! - Text encoding helpers for the standard PDF fonts

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{paint_page, DocumentRenderer};
