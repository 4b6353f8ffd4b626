//! Per-block height measurement.
//!
//! All heights are millimeters against the page content width. Diagram
//! measurement is the one exception handled by the engine itself, since
//! it needs the rasterized bitmap's aspect ratio.

use crate::fonts::FontMetrics;
use crate::style::{
    self, BADGE_HEIGHT, CAPTION_STRIP, DIAGRAM_HEIGHT, DIAGRAM_TITLE_SIZE, FontSpec, LIST_INDENT,
    SECTION_BREAK_HEIGHT, TEXT_BLOCK_PAD,
};
use crate::wrap::wrap_lines;

/// Height of a wrapped text block: line count times line height, plus the
/// fixed text padding.
pub fn text_block_height(
    metrics: &(impl FontMetrics + ?Sized),
    text: &str,
    font: FontSpec,
    max_width: f32,
) -> f32 {
    let lines = wrap_lines(metrics, text, font.size, max_width);
    lines.len() as f32 * font.line_height() + TEXT_BLOCK_PAD
}

/// Total height of a list measured as one atomic unit: the sum of each
/// item's wrapped height including its marker prefix. Lists are never
/// split mid-item or mid-list across pages.
pub fn list_height(
    metrics: &(impl FontMetrics + ?Sized),
    items: &[String],
    ordered: bool,
    content_width: f32,
) -> f32 {
    let item_width = content_width - LIST_INDENT;
    let font = style::paragraph_font(strand_doc::TextStyle::Normal);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = format!("{}{}", style::list_marker(ordered, i), item);
            text_block_height(metrics, &text, font, item_width)
        })
        .sum()
}

/// Image rows are constant-height regardless of image aspect ratios;
/// images are cropped to fit, not reflowed. Labeled rows add the caption
/// strip.
pub fn image_row_height(row_height: f32, has_labels: bool) -> f32 {
    if has_labels {
        row_height + CAPTION_STRIP
    } else {
        row_height
    }
}

/// A diagram block is its bold title plus the fixed-height raster.
pub fn diagram_height(
    metrics: &(impl FontMetrics + ?Sized),
    title: &str,
    content_width: f32,
) -> f32 {
    let title_font = FontSpec::new(DIAGRAM_TITLE_SIZE, true, false);
    text_block_height(metrics, title, title_font, content_width) + DIAGRAM_HEIGHT
}

pub fn badge_height() -> f32 {
    BADGE_HEIGHT
}

pub fn section_break_height() -> f32 {
    SECTION_BREAK_HEIGHT
}
