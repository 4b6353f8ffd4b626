use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

/// Error type for upstream generation calls.
///
/// Generation failures are terminal for the current user action; the
/// upstream message is carried verbatim so the UI layer can surface it.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("Generation request failed: {0}")]
    Upstream(String),

    #[error("Generation returned unparsable data: {0}")]
    InvalidResponse(String),

    #[error("Generation returned no image payload")]
    MissingImage,
}

/// An encoded image handed to or received from the upstream service.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    /// Encoded bytes (JPEG or PNG).
    pub bytes: Arc<Vec<u8>>,
    /// MIME type of `bytes`, e.g. `image/jpeg`.
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: Arc::new(bytes),
            mime_type: mime_type.into(),
        }
    }

    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/jpeg")
    }

    pub fn png(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/png")
    }
}

/// A trait for producing structured report data from client imagery.
///
/// The returned JSON is opaque here; the report crate validates it once at
/// its deserialization boundary and works with closed structs afterwards.
pub trait ReportGenerator: Send + Sync + Debug {
    fn generate_report(
        &self,
        images: &[ImagePayload],
        instructions: &str,
    ) -> impl Future<Output = Result<serde_json::Value, GenerationError>> + Send;
}

/// A trait for prompt-driven image edits ("realistic result" previews).
pub trait ImageEditor: Send + Sync + Debug {
    fn edit_image(
        &self,
        source: &ImagePayload,
        prompt: &str,
    ) -> impl Future<Output = Result<ImagePayload, GenerationError>> + Send;
}
