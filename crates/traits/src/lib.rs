//! Collaborator traits for the upstream generative service.
//!
//! The engine never talks to the model API directly; it consumes these
//! narrow seams so that tests and alternative backends can inject their
//! own implementations.

mod generation;

pub use generation::{GenerationError, ImageEditor, ImagePayload, ReportGenerator};
