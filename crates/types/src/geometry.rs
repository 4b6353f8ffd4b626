//! Geometry primitives shared by the layout and render crates.
//!
//! All document-space coordinates are in millimeters with the origin at the
//! top-left of the page; the PDF renderer converts to points and flips the
//! y-axis at the last moment.

use serde::{Deserialize, Serialize};

/// Points per millimeter (1 pt = 1/72 in).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert a millimeter length to PDF points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Convert a top-origin y coordinate to a bottom-origin PDF y coordinate.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Width divided by height. Returns 1.0 for a degenerate height.
    pub fn aspect_ratio(self) -> f32 {
        if self.height <= f32::EPSILON {
            1.0
        } else {
            self.width / self.height
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    pub fn contains(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Fixed page dimensions and uniform margin for one document render.
///
/// Constant for the lifetime of a layout pass; the flow engine never
/// negotiates page size at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_all: f32,
}

impl PageGeometry {
    pub fn new(width: f32, height: f32, margin_all: f32) -> Self {
        Self {
            width,
            height,
            margin_all,
        }
    }

    /// A4 portrait with the product's standard 15 mm margin.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_all: 15.0,
        }
    }

    /// Horizontal space available to content.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin_all
    }

    /// Lowest y a block may end on without crossing the bottom margin.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_all
    }

    /// Full content-box height of one page.
    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin_all
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
