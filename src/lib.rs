//! Generates the Telegram ID instruction PDF.
//!
//! The library splits the work into four steps: font resolution
//! ([`fonts`]), the style catalog ([`styles`]), content assembly
//! ([`content`]) and rendering ([`builder`]).  [`build_document`] runs all
//! four and writes the finished file.

pub mod builder;
pub mod content;
pub mod elements;
pub mod fonts;
pub mod model;
pub mod richtext;
pub mod styles;

pub use builder::{build_document, BuildError, DocumentBuilder, PdfOutput};
