//! Content-stream generation for placed blocks.
//!
//! Layout coordinates are top-origin millimeters; every operation here
//! converts to bottom-origin points as it is emitted.

use lopdf::Object;
use lopdf::content::Operation;

use strand_doc::{ContentBlock, RuleStyle, TextStyle};
use strand_layout::style::{
    BADGE_CORNER_RADIUS, BADGE_RECT_HEIGHT, BADGE_SIZE, CAPTION_SIZE, DIAGRAM_HEIGHT,
    DIAGRAM_TITLE_SIZE, FontSpec, LIST_INDENT, heading_font, list_marker, paragraph_font,
};
use strand_layout::wrap::wrap_lines;
use strand_layout::{FontMetrics, PlacedBlock};
use strand_types::geometry::{flip_y, mm_to_pt};
use strand_types::{Color, PageGeometry};

/// Fraction of the line height from the line top down to the text
/// baseline (Helvetica's ascender).
const ASCENT_FACTOR: f32 = 0.72;

/// Badge background width in mm, matching the original verdict chip.
const BADGE_RECT_WIDTH: f32 = 70.0;

/// Inset of the badge label from the rect's left edge, in mm.
const BADGE_TEXT_INSET: f32 = 5.0;

/// Caption baseline offset below the image row, in mm.
const CAPTION_OFFSET: f32 = 4.0;

/// Cubic Bézier circle approximation constant.
const KAPPA: f32 = 0.552_284_8;

/// Maps a resolved font to the page's Helvetica resource names
/// (`F1`..`F4`).
pub fn font_resource(font: FontSpec) -> &'static str {
    match (font.bold, font.italic) {
        (false, false) => "F1",
        (true, false) => "F2",
        (false, true) => "F3",
        (true, true) => "F4",
    }
}

/// Lossy UTF-8 to WinAnsi conversion. Latin-1 text (all the product's
/// Portuguese copy) maps byte-for-byte, the CP1252 punctuation block is
/// mapped explicitly, and anything else degrades to '?'.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            c if (c as u32) <= 0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Emits operations for the blocks of one page.
pub struct PageOps<'a> {
    metrics: &'a dyn FontMetrics,
    page: PageGeometry,
    image_row_height: f32,
    pub ops: Vec<Operation>,
}

impl<'a> PageOps<'a> {
    pub fn new(metrics: &'a dyn FontMetrics, page: PageGeometry, image_row_height: f32) -> Self {
        Self {
            metrics,
            page,
            image_row_height,
            ops: Vec::new(),
        }
    }

    fn pt_x(&self, x_mm: f32) -> f32 {
        mm_to_pt(x_mm)
    }

    fn pt_y(&self, y_mm: f32) -> f32 {
        mm_to_pt(flip_y(y_mm, self.page.height))
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        let (r, g, b) = color.to_rgb_f32();
        self.op("rg", vec![r.into(), g.into(), b.into()]);
    }

    fn set_stroke_color(&mut self, color: Color) {
        let (r, g, b) = color.to_rgb_f32();
        self.op("RG", vec![r.into(), g.into(), b.into()]);
    }

    /// One text line with its baseline at top-origin `(x_mm, baseline_mm)`.
    fn text_line(&mut self, text: &str, font: FontSpec, x_mm: f32, baseline_mm: f32) {
        if text.is_empty() {
            return;
        }
        let x = self.pt_x(x_mm);
        let y = self.pt_y(baseline_mm);
        self.op("BT", vec![]);
        self.op(
            "Tf",
            vec![font_resource(font).into(), font.size.into()],
        );
        self.op("Td", vec![x.into(), y.into()]);
        self.op(
            "Tj",
            vec![Object::String(
                encode_win_ansi(text),
                lopdf::StringFormat::Literal,
            )],
        );
        self.op("ET", vec![]);
    }

    /// A wrapped text run starting at top-origin `(x_mm, y_mm)`. Returns
    /// the height consumed (without the trailing block padding).
    fn text_block(&mut self, text: &str, font: FontSpec, x_mm: f32, y_mm: f32, width_mm: f32) -> f32 {
        let lines = wrap_lines(self.metrics, text, font.size, width_mm);
        let lh = font.line_height();
        for (i, line) in lines.iter().enumerate() {
            let baseline = y_mm + i as f32 * lh + ASCENT_FACTOR * lh;
            self.text_line(line, font, x_mm, baseline);
        }
        lines.len() as f32 * lh
    }

    /// Horizontal rule across `[x_mm, x_mm + width_mm]` at `y_mm`.
    fn rule(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, style: RuleStyle) {
        self.set_stroke_color(style.color());
        self.op("w", vec![mm_to_pt(style.line_width()).into()]);
        self.op("m", vec![self.pt_x(x_mm).into(), self.pt_y(y_mm).into()]);
        self.op(
            "l",
            vec![self.pt_x(x_mm + width_mm).into(), self.pt_y(y_mm).into()],
        );
        self.op("S", vec![]);
    }

    /// Filled rounded rectangle, top-origin mm rect.
    fn rounded_rect(&mut self, x_mm: f32, y_mm: f32, w_mm: f32, h_mm: f32, r_mm: f32, fill: Color) {
        let x = mm_to_pt(x_mm);
        let y = mm_to_pt(flip_y(y_mm + h_mm, self.page.height));
        let w = mm_to_pt(w_mm);
        let h = mm_to_pt(h_mm);
        let r = mm_to_pt(r_mm).min(w / 2.0).min(h / 2.0);
        let k = KAPPA * r;

        self.set_fill_color(fill);
        self.op("m", vec![(x + r).into(), y.into()]);
        self.op("l", vec![(x + w - r).into(), y.into()]);
        self.op(
            "c",
            vec![
                (x + w - r + k).into(),
                y.into(),
                (x + w).into(),
                (y + r - k).into(),
                (x + w).into(),
                (y + r).into(),
            ],
        );
        self.op("l", vec![(x + w).into(), (y + h - r).into()]);
        self.op(
            "c",
            vec![
                (x + w).into(),
                (y + h - r + k).into(),
                (x + w - r + k).into(),
                (y + h).into(),
                (x + w - r).into(),
                (y + h).into(),
            ],
        );
        self.op("l", vec![(x + r).into(), (y + h).into()]);
        self.op(
            "c",
            vec![
                (x + r - k).into(),
                (y + h).into(),
                x.into(),
                (y + h - r + k).into(),
                x.into(),
                (y + h - r).into(),
            ],
        );
        self.op("l", vec![x.into(), (y + r).into()]);
        self.op(
            "c",
            vec![
                x.into(),
                (y + r - k).into(),
                (x + r - k).into(),
                y.into(),
                (x + r).into(),
                y.into(),
            ],
        );
        self.op("f", vec![]);
    }

    /// Draws an image XObject cover-fitted into a top-origin mm cell:
    /// scaled to fill, centered, clipped to the cell.
    fn image_cover(
        &mut self,
        resource: &str,
        px_w: u32,
        px_h: u32,
        x_mm: f32,
        y_mm: f32,
        w_mm: f32,
        h_mm: f32,
    ) {
        let x = mm_to_pt(x_mm);
        let y = mm_to_pt(flip_y(y_mm + h_mm, self.page.height));
        let w = mm_to_pt(w_mm);
        let h = mm_to_pt(h_mm);

        let scale = (w / px_w as f32).max(h / px_h as f32);
        let draw_w = px_w as f32 * scale;
        let draw_h = px_h as f32 * scale;
        let dx = x - (draw_w - w) / 2.0;
        let dy = y - (draw_h - h) / 2.0;

        self.op("q", vec![]);
        self.op("re", vec![x.into(), y.into(), w.into(), h.into()]);
        self.op("W", vec![]);
        self.op("n", vec![]);
        self.op(
            "cm",
            vec![
                draw_w.into(),
                0.into(),
                0.into(),
                draw_h.into(),
                dx.into(),
                dy.into(),
            ],
        );
        self.op("Do", vec![resource.into()]);
        self.op("Q", vec![]);
    }

    /// Draws an image XObject stretched to exactly the given mm box.
    fn image_fit(&mut self, resource: &str, x_mm: f32, y_mm: f32, w_mm: f32, h_mm: f32) {
        let x = mm_to_pt(x_mm);
        let y = mm_to_pt(flip_y(y_mm + h_mm, self.page.height));
        let w = mm_to_pt(w_mm);
        let h = mm_to_pt(h_mm);
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![w.into(), 0.into(), 0.into(), h.into(), x.into(), y.into()],
        );
        self.op("Do", vec![resource.into()]);
        self.op("Q", vec![]);
    }

    /// Renders one placed block. `images` are the XObject resource names
    /// and pixel sizes for this block's image cells, in cell order;
    /// `diagram` the block's rasterized bitmap info when present.
    pub fn draw_block(
        &mut self,
        placed: &PlacedBlock,
        images: &[Option<(String, u32, u32)>],
        diagram: Option<&(String, u32, u32)>,
    ) {
        self.set_fill_color(Color::BLACK);
        match &placed.block {
            ContentBlock::Heading { text, level } => {
                self.text_block(text, heading_font(*level), placed.x, placed.y, placed.width);
            }
            ContentBlock::Paragraph { text, style } => {
                self.text_block(text, paragraph_font(*style), placed.x, placed.y, placed.width);
            }
            ContentBlock::List { items, ordered } => {
                let font = paragraph_font(TextStyle::Normal);
                let item_width = placed.width - LIST_INDENT;
                let mut y = placed.y;
                for (i, item) in items.iter().enumerate() {
                    let text = format!("{}{}", list_marker(*ordered, i), item);
                    let consumed =
                        self.text_block(&text, font, placed.x + LIST_INDENT, y, item_width);
                    y += consumed + strand_layout::style::TEXT_BLOCK_PAD;
                }
            }
            ContentBlock::ImageRow {
                labels, columns, ..
            } => {
                let cols = columns.count();
                let gutter = self.page.margin_all;
                let cell_w = (placed.width - (cols as f32 - 1.0) * gutter) / cols as f32;
                let row_h = self.image_row_height;
                for col in 0..cols {
                    let cell_x = placed.x + col as f32 * (cell_w + gutter);
                    if let Some(Some((name, px_w, px_h))) = images.get(col) {
                        self.image_cover(name, *px_w, *px_h, cell_x, placed.y, cell_w, row_h);
                    }
                    if let Some(label) = labels.get(col) {
                        let font = FontSpec::new(CAPTION_SIZE, false, false);
                        let text_w = self.metrics.text_width(label, font.size);
                        let tx = cell_x + (cell_w - text_w) / 2.0;
                        self.text_line(label, font, tx, placed.y + row_h + CAPTION_OFFSET);
                    }
                }
            }
            ContentBlock::Diagram { title, .. } => {
                let title_font = FontSpec::new(DIAGRAM_TITLE_SIZE, true, false);
                let consumed = self.text_block(title, title_font, placed.x, placed.y, placed.width);
                if let Some((name, px_w, px_h)) = diagram {
                    let aspect = *px_w as f32 / (*px_h).max(1) as f32;
                    let draw_w = DIAGRAM_HEIGHT * aspect;
                    let y = placed.y + consumed + strand_layout::style::TEXT_BLOCK_PAD;
                    self.image_fit(name, placed.x, y, draw_w, DIAGRAM_HEIGHT);
                }
            }
            ContentBlock::Badge { text, color_key } => {
                self.rounded_rect(
                    placed.x,
                    placed.y,
                    BADGE_RECT_WIDTH.min(placed.width),
                    BADGE_RECT_HEIGHT,
                    BADGE_CORNER_RADIUS,
                    color_key.color(),
                );
                let font = FontSpec::new(BADGE_SIZE, true, false);
                self.set_fill_color(Color::WHITE);
                self.text_line(
                    text,
                    font,
                    placed.x + BADGE_TEXT_INSET,
                    placed.y + BADGE_RECT_HEIGHT - 2.5,
                );
                self.set_fill_color(Color::BLACK);
            }
            ContentBlock::SectionBreak { style } => {
                // No rule at the very top of a fresh page; the gap alone
                // separates sections there.
                if (placed.y - self.page.margin_all).abs() >= 0.1 {
                    self.rule(placed.x, placed.y, placed.width, *style);
                }
            }
        }
    }
}
