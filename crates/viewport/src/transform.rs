use serde::{Deserialize, Serialize};

use crate::{MAX_SCALE, MIN_SCALE};

/// The combined scale + translate applied to present a zoomed/panned image.
///
/// Scale always satisfies `MIN_SCALE <= scale <= MAX_SCALE`. Zoom is
/// anchored at the element's visual center (the UI sets the transform
/// origin), so zooming never recomputes the translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    /// Sets the scale, clamped to the configured bounds.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// The CSS transform value the UI binds to the image element.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}
