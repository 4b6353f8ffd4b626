//! The single-pass flow engine.

use image::RgbaImage;
use std::collections::HashMap;

use strand_diagram::VectorRasterizer;
use strand_doc::{ContentBlock, Document};
use strand_types::PageGeometry;

use crate::fonts::FontMetrics;
use crate::measure;
use crate::output::{LaidOutDocument, PlacedBlock};
use crate::pagination::{FIT_EPSILON, at_page_top, check_block_fit};
use crate::style::{DIAGRAM_RASTER_PX, IMAGE_ROW_HEIGHT, INTER_BLOCK_SPACING, heading_font, paragraph_font};
use crate::LayoutError;

/// What to do when one diagram fails to rasterize. The engine defaults to
/// propagating; report builders opt into skipping, which logs the
/// omission and keeps the rest of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramPolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    pub image_row_height: f32,
    pub inter_block_spacing: f32,
    pub diagram_policy: DiagramPolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            image_row_height: IMAGE_ROW_HEIGHT,
            inter_block_spacing: INTER_BLOCK_SPACING,
            diagram_policy: DiagramPolicy::default(),
        }
    }
}

/// Places a document onto fixed-size pages.
///
/// One pass over the blocks; each iteration either fits the block on the
/// current page or forces exactly one new page, so the engine is O(n)
/// and always terminates. Re-running on the same inputs yields identical
/// output.
pub struct FlowEngine<'a> {
    metrics: &'a dyn FontMetrics,
    rasterizer: &'a dyn VectorRasterizer,
    options: LayoutOptions,
}

impl<'a> FlowEngine<'a> {
    pub fn new(metrics: &'a dyn FontMetrics, rasterizer: &'a dyn VectorRasterizer) -> Self {
        Self {
            metrics,
            rasterizer,
            options: LayoutOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Lays the document out on `page`-sized pages, preserving block
    /// order. Blocks are atomic: a block that does not fit moves whole to
    /// the next page; only a block taller than the page content box ever
    /// crosses the bottom margin, and only from a fresh page top.
    pub fn layout(
        &self,
        document: &Document,
        page: &PageGeometry,
    ) -> Result<LaidOutDocument, LayoutError> {
        let content_width = page.content_width();
        let mut placed: Vec<PlacedBlock> = Vec::with_capacity(document.len());
        let mut diagram_rasters: HashMap<usize, RgbaImage> = HashMap::new();

        let mut page_index = 0usize;
        let mut y = page.margin_all;

        for block in document {
            let mut raster = None;
            let height = match self.measure_block(block, content_width, &mut raster)? {
                Some(h) => h,
                // A skipped diagram leaves no trace in the output.
                None => continue,
            };

            let fit = check_block_fit(y, height, page.content_bottom());
            if fit.should_break && !at_page_top(y, page.margin_all) {
                page_index += 1;
                y = page.margin_all;
            }
            if height > page.content_height() + FIT_EPSILON {
                // Fresh-page overflow allowance: place rather than loop.
                log::warn!(
                    "{} block is {:.1}mm tall but the page content box is only {:.1}mm; placing with overflow",
                    block.kind(),
                    height,
                    page.content_height()
                );
            }

            placed.push(PlacedBlock {
                block: block.clone(),
                page_index,
                x: page.margin_all,
                y,
                width: content_width,
                height,
            });
            if let Some(bitmap) = raster {
                diagram_rasters.insert(placed.len() - 1, bitmap);
            }

            y += height + self.options.inter_block_spacing;
        }

        let page_count = if placed.is_empty() { 0 } else { page_index + 1 };
        Ok(LaidOutDocument {
            placed,
            diagram_rasters,
            page_count,
        })
    }

    /// Measures one block. Returns `None` when a failed diagram is
    /// skipped under [`DiagramPolicy::Skip`]; fills `raster` for diagram
    /// blocks so the renderer reuses the bitmap.
    fn measure_block(
        &self,
        block: &ContentBlock,
        content_width: f32,
        raster: &mut Option<RgbaImage>,
    ) -> Result<Option<f32>, LayoutError> {
        let height = match block {
            ContentBlock::Heading { text, level } => measure::text_block_height(
                self.metrics,
                text,
                heading_font(*level),
                content_width,
            ),
            ContentBlock::Paragraph { text, style } => measure::text_block_height(
                self.metrics,
                text,
                paragraph_font(*style),
                content_width,
            ),
            ContentBlock::List { items, ordered } => {
                measure::list_height(self.metrics, items, *ordered, content_width)
            }
            ContentBlock::ImageRow {
                images,
                labels,
                columns,
            } => {
                if images.len() > columns.count() {
                    return Err(LayoutError::ImageRowArity {
                        images: images.len(),
                        columns: columns.count(),
                    });
                }
                measure::image_row_height(self.options.image_row_height, !labels.is_empty())
            }
            ContentBlock::Diagram { title, markup } => {
                match self.rasterizer.rasterize(markup, DIAGRAM_RASTER_PX) {
                    Ok(bitmap) => {
                        *raster = Some(bitmap);
                        measure::diagram_height(self.metrics, title, content_width)
                    }
                    Err(source) => match self.options.diagram_policy {
                        DiagramPolicy::Abort => {
                            return Err(LayoutError::Diagram {
                                title: title.clone(),
                                source,
                            });
                        }
                        DiagramPolicy::Skip => {
                            log::warn!("skipping diagram '{title}': {source}");
                            return Ok(None);
                        }
                    },
                }
            }
            ContentBlock::Badge { .. } => measure::badge_height(),
            ContentBlock::SectionBreak { .. } => measure::section_break_height(),
        };
        Ok(Some(height))
    }
}
