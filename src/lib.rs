//! strand: salon consultation report engine.
//!
//! Integration layer over the member crates: builds documents from domain
//! reports, lays them out on A4, renders PDFs, watermarks generated
//! imagery, and holds the consultation session state for the UI layer.

pub mod error;
pub mod pipeline;
pub mod session;

pub use error::PipelineError;
pub use pipeline::{ExportedPdf, ReportPipeline};
pub use session::ConsultationSession;

// Re-export the crates that form the public surface.
pub use strand_diagram as diagram;
pub use strand_doc as doc;
pub use strand_layout as layout;
pub use strand_render as render;
pub use strand_report as report;
pub use strand_traits as traits;
pub use strand_types as types;
pub use strand_viewport as viewport;
pub use strand_watermark as watermark;
