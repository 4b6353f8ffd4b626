//! Export pipeline: domain report in, finished PDF out.

use chrono::Utc;
use std::sync::Arc;

use strand_diagram::SvgRasterizer;
use strand_doc::{Document, SharedData};
use strand_layout::{DiagramPolicy, FlowEngine, FontMetrics, LayoutOptions, fonts};
use strand_render::{DocInfo, PdfRenderer};
use strand_report::builders;
use strand_report::{ColoristImages, ColoristReport, HairstylistImages, HairstylistReport,
    VisagismImages, VisagismReport};
use strand_types::PageGeometry;
use strand_watermark::WatermarkSpec;

use crate::error::PipelineError;

/// A rendered report ready to hand to the user.
#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// One configured export pipeline: font metrics, diagram rasterizer,
/// watermark spec and page geometry, shared across exports.
pub struct ReportPipeline {
    metrics: Box<dyn FontMetrics>,
    rasterizer: SvgRasterizer,
    watermark: Option<WatermarkSpec>,
    page: PageGeometry,
}

impl ReportPipeline {
    /// Pipeline with platform-default metrics, the standard rasterizer
    /// and A4 pages. The watermark spec is optional because the mark
    /// asset ships with the application, not this library.
    pub fn new(watermark: Option<WatermarkSpec>) -> Self {
        Self {
            metrics: fonts::default_metrics(),
            rasterizer: SvgRasterizer::default(),
            watermark,
            page: PageGeometry::a4(),
        }
    }

    pub fn with_metrics(mut self, metrics: Box<dyn FontMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Watermarks one generated image. Decode or encode failures fall
    /// back to the unwatermarked source; the export never aborts over a
    /// missing mark.
    pub fn watermarked(&self, source: &SharedData) -> SharedData {
        let Some(spec) = &self.watermark else {
            return source.clone();
        };
        match spec.apply(source) {
            Ok(bytes) => Arc::new(bytes),
            Err(err) => {
                log::warn!("watermarking failed, using original image: {err}");
                source.clone()
            }
        }
    }

    /// Lays out and renders one document with the pipeline's fixed page
    /// geometry. Diagrams that fail to rasterize are skipped and logged,
    /// never fatal to the export.
    fn render_document(
        &self,
        document: &Document,
        title: &str,
    ) -> Result<Vec<u8>, PipelineError> {
        let laid = FlowEngine::new(self.metrics.as_ref(), &self.rasterizer)
            .with_options(LayoutOptions {
                diagram_policy: DiagramPolicy::Skip,
                ..LayoutOptions::default()
            })
            .layout(document, &self.page)?;

        let info = DocInfo {
            title: Some(title.to_string()),
            creation_date: Some(Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
        };
        let bytes = PdfRenderer::new(self.metrics.as_ref(), self.page)
            .with_info(info)
            .render(&laid)?;
        Ok(bytes)
    }

    /// Exports a hairstylist report. The realistic preview is generated
    /// upstream; it gets watermarked here before entering the document.
    pub fn export_hairstylist(
        &self,
        report: &HairstylistReport,
        mut images: HairstylistImages,
    ) -> Result<ExportedPdf, PipelineError> {
        images.realistic = images.realistic.map(|img| self.watermarked(&img));

        let document = builders::build_hairstylist_document(report, &images);
        let title = format!("Plano de Corte: {}", report.cutting_plan.style_name);
        let bytes = self.render_document(&document, &title)?;
        let filename = format!(
            "plano-de-corte-{}.pdf",
            slug::slugify(&report.cutting_plan.style_name)
        );
        Ok(ExportedPdf { bytes, filename })
    }

    /// Exports a colorist report; the try-on preview is watermarked.
    pub fn export_colorist(
        &self,
        report: &ColoristReport,
        mut images: ColoristImages,
    ) -> Result<ExportedPdf, PipelineError> {
        images.try_on = images.try_on.map(|img| self.watermarked(&img));

        let document = builders::build_colorist_document(report, &images);
        let bytes = self.render_document(&document, "Relatório de Colorimetria Expert")?;
        let filename = format!(
            "colorimetria-{}.pdf",
            slug::slugify(&report.mechas_technique.name)
        );
        Ok(ExportedPdf { bytes, filename })
    }

    /// Exports a visagism report. Client photos are never watermarked.
    pub fn export_visagism(
        &self,
        report: &VisagismReport,
        images: VisagismImages,
    ) -> Result<ExportedPdf, PipelineError> {
        let document = builders::build_visagism_document(report, &images);
        let bytes = self.render_document(&document, "Relatório de Visagismo")?;
        let filename = format!("visagismo-{}.pdf", slug::slugify(&report.face_shape));
        Ok(ExportedPdf { bytes, filename })
    }
}
