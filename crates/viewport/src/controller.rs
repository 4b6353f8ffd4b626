use serde::{Deserialize, Serialize};

use crate::transform::Transform2D;
use crate::{WHEEL_SENSITIVITY, ZOOM_STEP};

/// Gesture state of a controller: either idle or tracking one drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PanPhase {
    Idle,
    /// A drag is in flight; the anchor is `pointer - translate` at press
    /// time, so moving the pointer keeps the grab point under the cursor.
    Panning {
        anchor_x: f32,
        anchor_y: f32,
    },
}

/// Stateful zoom/pan controller for a single displayed image.
///
/// Owned by one viewport; gesture handlers run on the UI event-dispatch
/// thread so no locking is needed. Wheel only touches scale and pan only
/// touches translate, so the two gesture kinds interleave safely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportController {
    transform: Transform2D,
    phase: PanPhase,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self {
            transform: Transform2D::identity(),
            phase: PanPhase::Idle,
        }
    }

    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.phase, PanPhase::Panning { .. })
    }

    /// Wheel zoom: scale moves against the wheel delta, clamped to bounds.
    /// Valid in either gesture phase and does not change it.
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.transform
            .set_scale(self.transform.scale - delta_y * WHEEL_SENSITIVITY);
    }

    /// Begins a drag. Panning is disabled at or below 1x zoom; the image
    /// fits its container there and dragging it would only lose it.
    pub fn on_pan_start(&mut self, pointer_x: f32, pointer_y: f32) {
        if self.transform.scale <= 1.0 {
            return;
        }
        self.phase = PanPhase::Panning {
            anchor_x: pointer_x - self.transform.translate_x,
            anchor_y: pointer_y - self.transform.translate_y,
        };
    }

    /// Moves the image while a drag is active. The translate is not
    /// clamped; the container clips whatever leaves the frame.
    pub fn on_pan_move(&mut self, pointer_x: f32, pointer_y: f32) {
        if let PanPhase::Panning { anchor_x, anchor_y } = self.phase {
            self.transform.translate_x = pointer_x - anchor_x;
            self.transform.translate_y = pointer_y - anchor_y;
        }
    }

    /// Ends the drag. Also bound to pointer-leave by the UI layer.
    pub fn on_pan_end(&mut self) {
        self.phase = PanPhase::Idle;
    }

    /// Multiplies the scale by `factor`, clamped to bounds. The explicit
    /// zoom controls pass [`ZOOM_STEP`] and its reciprocal.
    pub fn zoom_by(&mut self, factor: f32) {
        self.transform.set_scale(self.transform.scale * factor);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / ZOOM_STEP);
    }

    /// Restores the identity transform. Does not interrupt an active drag
    /// phase; the next pan move re-derives the translate from its anchor.
    pub fn reset(&mut self) {
        self.transform = Transform2D::identity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_SCALE, MIN_SCALE};

    #[test]
    fn wheel_scale_stays_in_bounds() {
        let mut vp = ViewportController::new();
        for _ in 0..10_000 {
            vp.on_wheel(-120.0);
        }
        assert_eq!(vp.transform().scale, MAX_SCALE);
        for _ in 0..100_000 {
            vp.on_wheel(120.0);
        }
        assert_eq!(vp.transform().scale, MIN_SCALE);
    }

    #[test]
    fn zoom_by_sequences_stay_in_bounds() {
        let mut vp = ViewportController::new();
        for _ in 0..50 {
            vp.zoom_in();
        }
        assert!(vp.transform().scale <= MAX_SCALE);
        for _ in 0..200 {
            vp.zoom_out();
        }
        assert!(vp.transform().scale >= MIN_SCALE);
    }

    #[test]
    fn pan_is_disabled_at_or_below_1x() {
        let mut vp = ViewportController::new();
        vp.on_pan_start(50.0, 50.0);
        vp.on_pan_move(80.0, 90.0);
        assert_eq!(vp.transform().translate_x, 0.0);
        assert_eq!(vp.transform().translate_y, 0.0);
        assert!(!vp.is_panning());
    }

    #[test]
    fn pan_tracks_pointer_relative_to_anchor() {
        let mut vp = ViewportController::new();
        vp.zoom_by(2.0);
        vp.on_pan_start(100.0, 100.0);
        assert!(vp.is_panning());
        vp.on_pan_move(130.0, 90.0);
        assert_eq!(vp.transform().translate_x, 30.0);
        assert_eq!(vp.transform().translate_y, -10.0);
        vp.on_pan_end();
        assert!(!vp.is_panning());
        // Moves after release are ignored.
        vp.on_pan_move(500.0, 500.0);
        assert_eq!(vp.transform().translate_x, 30.0);
    }

    #[test]
    fn wheel_during_pan_keeps_phase() {
        let mut vp = ViewportController::new();
        vp.zoom_by(2.0);
        vp.on_pan_start(10.0, 10.0);
        vp.on_wheel(-120.0);
        assert!(vp.is_panning());
    }

    #[test]
    fn reset_restores_identity_from_any_state() {
        let mut vp = ViewportController::new();
        vp.zoom_by(3.0);
        vp.on_pan_start(10.0, 10.0);
        vp.on_pan_move(60.0, 70.0);
        vp.reset();
        assert_eq!(vp.transform(), Transform2D::identity());
        vp.reset();
        assert_eq!(vp.transform(), Transform2D::identity());
    }
}
