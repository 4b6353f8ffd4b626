//! Pagination/flow engine.
//!
//! Places an ordered sequence of content blocks onto fixed-size pages in a
//! single deterministic pass, measuring each block against the page content
//! width and starting a new page whenever the cursor would overflow. Blocks
//! are atomic: nothing is split across a page boundary, and a block taller
//! than a whole page is placed on a fresh page with overflow allowed rather
//! than looping.

use thiserror::Error;

use strand_diagram::DiagramRenderError;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Diagram '{title}' failed to rasterize: {source}")]
    Diagram {
        title: String,
        #[source]
        source: DiagramRenderError,
    },
    #[error("Image row carries {images} images for {columns} columns")]
    ImageRowArity { images: usize, columns: usize },
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod engine;
pub mod fonts;
pub mod measure;
pub mod output;
pub mod pagination;
pub mod style;
pub mod wrap;

pub use engine::{DiagramPolicy, FlowEngine, LayoutOptions};
pub use fonts::{ApproxMetrics, FaceMetrics, FontMetrics};
pub use output::{LaidOutDocument, PlacedBlock};
pub use style::FontSpec;

// Re-export geometry types used throughout to prevent type mismatches.
pub use strand_types::{PageGeometry, Rect, Size};

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod wrap_test;
