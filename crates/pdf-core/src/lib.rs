//! Low-level PDF generation
//!
//! Builds A4 documents from scratch with the built-in Helvetica family:
//! - `document` - page-buffered document model with top-origin coordinates
//! - `font` - base-14 font metrics and WinAnsi encoding
//! - `text` - text show operators
//! - `graphics` - rectangle and line operators
//! - `image` - JPEG/PNG embedding as image XObjects

pub mod document;
pub mod font;
pub mod graphics;
pub mod image;
pub mod text;

pub use document::{Color, PdfDocument, PAGE_HEIGHT, PAGE_WIDTH};
pub use font::FontWeight;
pub use graphics::PaintMode;
pub use image::ImageXObject;

use thiserror::Error;

/// Errors from PDF generation
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Invalid page index {page} (document has {count} pages)")]
    InvalidPage { page: usize, count: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
