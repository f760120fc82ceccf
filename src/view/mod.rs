//! Markup for the two screens of the reader.
//!
//! - [`feed`]: paginated story list
//! - [`detail`]: one story with its comment tree
//! - [`comment`]: recursive comment rendering
//! - [`document`]: the page the markup is mounted into

pub mod comment;
pub mod detail;
pub mod document;
pub mod feed;
pub mod template;

pub use document::{Document, DocumentFile, RenderSink};
