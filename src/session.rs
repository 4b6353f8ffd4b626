//! Consultation session state.
//!
//! One session per client consultation, owned by the caller; this
//! replaces the old process-wide "current chat" singleton. The session
//! holds the upstream collaborators and the client imagery, and turns
//! raw generation responses into validated domain reports.

use strand_report::{ColoristReport, HairstylistReport, VisagismReport};
use strand_traits::{GenerationError, ImageEditor, ImagePayload, ReportGenerator};

use crate::error::PipelineError;

pub struct ConsultationSession<G, E> {
    generator: G,
    editor: E,
    client_image: Option<ImagePayload>,
    reference_image: Option<ImagePayload>,
}

impl<G: ReportGenerator, E: ImageEditor> ConsultationSession<G, E> {
    pub fn new(generator: G, editor: E) -> Self {
        Self {
            generator,
            editor,
            client_image: None,
            reference_image: None,
        }
    }

    pub fn set_client_image(&mut self, image: ImagePayload) {
        self.client_image = Some(image);
    }

    pub fn set_reference_image(&mut self, image: ImagePayload) {
        self.reference_image = Some(image);
    }

    pub fn client_image(&self) -> Option<&ImagePayload> {
        self.client_image.as_ref()
    }

    pub fn reference_image(&self) -> Option<&ImagePayload> {
        self.reference_image.as_ref()
    }

    fn attached_images(&self) -> Vec<ImagePayload> {
        [&self.client_image, &self.reference_image]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }

    /// Runs one hairstylist generation and validates the response.
    /// Generation failures are terminal for the user action and carry
    /// the upstream message verbatim.
    pub async fn hairstylist_report(
        &self,
        instructions: &str,
    ) -> Result<HairstylistReport, PipelineError> {
        let value = self
            .generator
            .generate_report(&self.attached_images(), instructions)
            .await?;
        Ok(HairstylistReport::from_json(value)?)
    }

    pub async fn colorist_report(
        &self,
        instructions: &str,
    ) -> Result<ColoristReport, PipelineError> {
        let value = self
            .generator
            .generate_report(&self.attached_images(), instructions)
            .await?;
        Ok(ColoristReport::from_json(value)?)
    }

    pub async fn visagism_report(
        &self,
        instructions: &str,
    ) -> Result<VisagismReport, PipelineError> {
        let value = self
            .generator
            .generate_report(&self.attached_images(), instructions)
            .await?;
        Ok(VisagismReport::from_json(value)?)
    }

    /// Asks the editor for the "realistic result" image of the client
    /// wearing the planned cut. Requires a client image.
    pub async fn realistic_preview(&self, prompt: &str) -> Result<ImagePayload, PipelineError> {
        let client = self
            .client_image
            .as_ref()
            .ok_or(GenerationError::MissingImage)?;
        Ok(self.editor.edit_image(client, prompt).await?)
    }
}
