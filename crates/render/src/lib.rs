//! PDF renderer for laid-out documents.
//!
//! Walks `PlacedBlock`s page by page, draws each onto a PDF content
//! stream through lopdf, and serializes all pages into one document.
//! Text uses the Base-14 Helvetica family with WinAnsi encoding; images
//! embed as DCTDecode (JPEG passthrough) or FlateDecode raw RGB.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Image embedding error: {0}")]
    Image(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

mod content;
mod renderer;
mod xobject;

pub use renderer::{DocInfo, PdfRenderer};
