//! Typographic constants for report blocks.
//!
//! The product renders everything in Helvetica at a small closed set of
//! sizes; sizes are nominal points while all page distances are
//! millimeters, bridged by [`LINE_FACTOR`].

use strand_doc::TextStyle;

/// Millimeters of line height per point of font size. This is the
/// original export's line factor and keeps measured text heights
/// compatible with its documents.
pub const LINE_FACTOR: f32 = 0.35;

/// Vertical padding added under every measured text block, in mm.
pub const TEXT_BLOCK_PAD: f32 = 2.0;

/// Gap inserted between consecutive blocks, in mm.
pub const INTER_BLOCK_SPACING: f32 = 2.0;

/// Body text size for paragraphs and list items.
pub const BODY_SIZE: f32 = 10.0;

/// Caption size under image rows.
pub const CAPTION_SIZE: f32 = 9.0;

/// Uniform image row height, in mm.
pub const IMAGE_ROW_HEIGHT: f32 = 75.0;

/// Height of the caption strip under a labeled image row, in mm.
pub const CAPTION_STRIP: f32 = 6.0;

/// Target diagram height on the page, in mm.
pub const DIAGRAM_HEIGHT: f32 = 70.0;

/// Pixel height diagrams are rasterized at before placement.
pub const DIAGRAM_RASTER_PX: u32 = 250;

/// Diagram title size.
pub const DIAGRAM_TITLE_SIZE: f32 = 11.0;

/// Total badge block height including its rounded background, in mm.
pub const BADGE_HEIGHT: f32 = 12.0;

/// Height of the badge's filled rounded rect, in mm.
pub const BADGE_RECT_HEIGHT: f32 = 8.0;

/// Badge label size.
pub const BADGE_SIZE: f32 = 12.0;

/// Corner radius of the badge background, in mm.
pub const BADGE_CORNER_RADIUS: f32 = 3.0;

/// Gap a section rule occupies, in mm.
pub const SECTION_BREAK_HEIGHT: f32 = 8.0;

/// Indent applied to list item text, in mm.
pub const LIST_INDENT: f32 = 5.0;

/// Marker for unordered list items.
pub const BULLET: &str = "\u{2022}";

/// Font face and size resolved for one text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub const fn new(size: f32, bold: bool, italic: bool) -> Self {
        Self { size, bold, italic }
    }

    /// Line height in mm for this font.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_FACTOR
    }
}

/// Resolved font for a heading level. Level 1 is the report title;
/// anything past 3 clamps to the smallest heading.
pub fn heading_font(level: u8) -> FontSpec {
    let size = match level {
        0 | 1 => 22.0,
        2 => 14.0,
        _ => 11.0,
    };
    FontSpec::new(size, true, false)
}

/// Resolved font for a paragraph style.
pub fn paragraph_font(style: TextStyle) -> FontSpec {
    match style {
        TextStyle::Normal => FontSpec::new(BODY_SIZE, false, false),
        TextStyle::Italic => FontSpec::new(BODY_SIZE, false, true),
        TextStyle::Bold => FontSpec::new(BODY_SIZE, true, false),
    }
}

/// Marker text prefixed to a list item.
pub fn list_marker(ordered: bool, index: usize) -> String {
    if ordered {
        format!("{}. ", index + 1)
    } else {
        format!("{BULLET} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_shrink() {
        assert!(heading_font(1).size > heading_font(2).size);
        assert!(heading_font(2).size > heading_font(3).size);
        assert_eq!(heading_font(7), heading_font(3));
    }

    #[test]
    fn markers() {
        assert_eq!(list_marker(true, 0), "1. ");
        assert_eq!(list_marker(true, 11), "12. ");
        assert_eq!(list_marker(false, 5), "\u{2022} ");
    }

    #[test]
    fn line_height_uses_the_line_factor() {
        let f = FontSpec::new(10.0, false, false);
        assert!((f.line_height() - 3.5).abs() < 1e-6);
    }
}
