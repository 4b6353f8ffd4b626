//! Document model for consultation reports.
//!
//! This crate defines the in-memory representation of one report between the
//! report builders and the flow engine: an ordered sequence of typed content
//! blocks. Order is reading order and must survive layout unchanged.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use strand_types::Color;

/// A reference-counted container for shared, immutable data like images.
pub type SharedData = Arc<Vec<u8>>;

/// An ordered sequence of content blocks forming one report.
pub type Document = Vec<ContentBlock>;

/// Text emphasis for paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    #[default]
    Normal,
    Italic,
    Bold,
}

/// Number of image columns in an [`ContentBlock::ImageRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Columns {
    Two,
    Three,
}

impl Columns {
    pub fn count(self) -> usize {
        match self {
            Columns::Two => 2,
            Columns::Three => 3,
        }
    }
}

/// Closed palette for verdict badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeColor {
    Emerald,
    Amber,
    Red,
    Slate,
}

impl BadgeColor {
    pub fn color(self) -> Color {
        match self {
            BadgeColor::Emerald => Color::EMERALD,
            BadgeColor::Amber => Color::AMBER,
            BadgeColor::Red => Color::RED,
            BadgeColor::Slate => Color::SLATE,
        }
    }
}

/// Visual weight of a [`ContentBlock::SectionBreak`] rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleStyle {
    /// Thin gray separator between sections.
    #[default]
    Separator,
    /// Thick brand-colored rule above the report title.
    Accent,
}

impl RuleStyle {
    pub fn color(self) -> Color {
        match self {
            RuleStyle::Separator => Color::SEPARATOR,
            RuleStyle::Accent => Color::EMERALD,
        }
    }

    /// Stroke width in millimeters.
    pub fn line_width(self) -> f32 {
        match self {
            RuleStyle::Separator => 0.2,
            RuleStyle::Accent => 1.0,
        }
    }
}

/// One typed unit of report content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// A section or report heading. Level 1 is the report title.
    Heading { text: String, level: u8 },
    /// A run of body text, wrapped to the content width.
    Paragraph { text: String, style: TextStyle },
    /// A bulleted or numbered list, paginated as one atomic unit.
    List { items: Vec<String>, ordered: bool },
    /// Two or three images drawn at uniform height with optional captions.
    /// A `None` entry leaves that cell empty while preserving column
    /// positions, matching the original side-by-side comparison layout.
    ImageRow {
        images: Vec<Option<SharedData>>,
        labels: Vec<String>,
        columns: Columns,
    },
    /// A vector diagram rasterized out-of-band at a fixed target height.
    Diagram { title: String, markup: String },
    /// A short verdict chip on a colored rounded-rect background.
    Badge { text: String, color_key: BadgeColor },
    /// A horizontal rule plus gap. Visual separator only, never a forced
    /// page break.
    SectionBreak { style: RuleStyle },
}

impl ContentBlock {
    /// Returns a string identifier for the block type, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::List { .. } => "list",
            ContentBlock::ImageRow { .. } => "image-row",
            ContentBlock::Diagram { .. } => "diagram",
            ContentBlock::Badge { .. } => "badge",
            ContentBlock::SectionBreak { .. } => "section-break",
        }
    }
}

// Convenience constructors used by the report builders.

pub fn heading(text: impl Into<String>, level: u8) -> ContentBlock {
    ContentBlock::Heading {
        text: text.into(),
        level,
    }
}

pub fn paragraph(text: impl Into<String>) -> ContentBlock {
    ContentBlock::Paragraph {
        text: text.into(),
        style: TextStyle::Normal,
    }
}

pub fn styled_paragraph(text: impl Into<String>, style: TextStyle) -> ContentBlock {
    ContentBlock::Paragraph {
        text: text.into(),
        style,
    }
}

pub fn bullet_list<I, S>(items: I) -> ContentBlock
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ContentBlock::List {
        items: items.into_iter().map(Into::into).collect(),
        ordered: false,
    }
}

pub fn numbered_list<I, S>(items: I) -> ContentBlock
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ContentBlock::List {
        items: items.into_iter().map(Into::into).collect(),
        ordered: true,
    }
}

pub fn section_break() -> ContentBlock {
    ContentBlock::SectionBreak {
        style: RuleStyle::Separator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(heading("Plano", 1).kind(), "heading");
        assert_eq!(section_break().kind(), "section-break");
        assert_eq!(bullet_list(["a", "b"]).kind(), "list");
    }

    #[test]
    fn badge_palette_maps_to_brand_colors() {
        assert_eq!(BadgeColor::Emerald.color(), Color::EMERALD);
        assert_eq!(BadgeColor::Slate.color(), Color::SLATE);
    }

    #[test]
    fn rule_styles_differ_in_weight() {
        assert!(RuleStyle::Accent.line_width() > RuleStyle::Separator.line_width());
    }
}
