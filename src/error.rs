//! Unified error type for pipeline operations.

use thiserror::Error;

use strand_layout::LayoutError;
use strand_render::RenderError;
use strand_report::ReportError;
use strand_traits::GenerationError;

/// The main error enum for high-level export and session operations.
///
/// Watermark failures never appear here: they are recovered at each call
/// site by falling back to the unwatermarked image.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Report validation error: {0}")]
    Report(#[from] ReportError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Other pipeline error: {0}")]
    Other(String),
}
