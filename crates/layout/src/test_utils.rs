//! Shared fixtures for engine tests.

use image::RgbaImage;

use strand_diagram::{DiagramRenderError, VectorRasterizer};

/// Rasterizer double producing a solid bitmap with a fixed aspect ratio,
/// or a configured failure.
#[derive(Debug)]
pub struct StubRasterizer {
    pub aspect: f32,
    pub fail: bool,
}

impl StubRasterizer {
    pub fn square() -> Self {
        Self {
            aspect: 1.0,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            aspect: 1.0,
            fail: true,
        }
    }
}

impl VectorRasterizer for StubRasterizer {
    fn rasterize(
        &self,
        _markup: &str,
        target_height_px: u32,
    ) -> Result<RgbaImage, DiagramRenderError> {
        if self.fail {
            return Err(DiagramRenderError::Parse("stub failure".into()));
        }
        let w = ((target_height_px as f32) * self.aspect).round().max(1.0) as u32;
        Ok(RgbaImage::from_pixel(
            w,
            target_height_px,
            image::Rgba([255, 255, 255, 255]),
        ))
    }
}
