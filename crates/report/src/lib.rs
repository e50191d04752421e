//! Personal detail report rendering
//!
//! Lays a submission record out as a paginated, styled A4 document:
//! - `style` - the fixed visual contract (geometry, colors, thresholds)
//! - `canvas` - drawing abstraction and the PDF-backed implementation
//! - `sections` - section datasets with row suppression
//! - `render` - the fixed-order layout pipeline and filename derivation

pub mod canvas;
pub mod render;
pub mod sections;
pub mod style;

pub use canvas::{Canvas, PdfCanvas, TableData};
pub use render::{output_filename, render, render_pdf};

use thiserror::Error;

/// Errors from report rendering
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
