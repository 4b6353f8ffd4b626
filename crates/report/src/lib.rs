//! Domain report types and document builders.
//!
//! The upstream model returns one JSON payload per consultation kind.
//! Each payload is validated exactly once at the deserialization boundary
//! (`*Report::from_json`) and treated as a closed immutable struct from
//! then on. The builders are pure functions from a report plus its
//! imagery to the document model; they never touch I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Malformed report payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid report: {0}")]
    Invalid(String),
}

pub mod builders;
pub mod model;

pub use builders::{ColoristImages, HairstylistImages, VisagismImages};
pub use model::{
    ColoristReport, DiagramSpec, HairstylistReport, StyleCategory, Verdict, VisagismReport,
};
