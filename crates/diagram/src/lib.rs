//! Vector-diagram rasterization capability.
//!
//! Technique diagrams arrive as SVG markup from the upstream model. The
//! flow engine needs each diagram's pixel aspect ratio to place it, and
//! the PDF renderer needs the pixels themselves; both consume the
//! [`VectorRasterizer`] seam so the SVG backend stays replaceable.

use image::RgbaImage;
use resvg::tiny_skia;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for diagram rasterization. One failed diagram is never
/// fatal on its own; skip-vs-abort is the layout caller's policy.
#[derive(Error, Debug, Clone)]
pub enum DiagramRenderError {
    #[error("Failed to parse vector markup: {0}")]
    Parse(String),

    #[error("Diagram canvas is empty ({width:.1}x{height:.1})")]
    EmptyCanvas { width: f32, height: f32 },

    #[error("Rasterization failed: {0}")]
    Raster(String),
}

/// Rasterizes vector markup to an RGBA bitmap at a fixed pixel height.
pub trait VectorRasterizer: Send + Sync + Debug {
    /// Renders `markup` scaled so the output is `target_height_px` tall;
    /// width follows the markup's native aspect ratio.
    fn rasterize(
        &self,
        markup: &str,
        target_height_px: u32,
    ) -> Result<RgbaImage, DiagramRenderError>;
}

/// resvg-backed rasterizer drawing onto an opaque white canvas.
#[derive(Debug, Clone)]
pub struct SvgRasterizer {
    /// Supersampling multiplier applied to the target height. The raster
    /// is placed into a physically smaller box on the page, so 2x keeps
    /// strokes crisp in print.
    pub scale_factor: f32,
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self { scale_factor: 2.0 }
    }
}

impl SvgRasterizer {
    pub fn new(scale_factor: f32) -> Self {
        Self { scale_factor }
    }
}

impl VectorRasterizer for SvgRasterizer {
    fn rasterize(
        &self,
        markup: &str,
        target_height_px: u32,
    ) -> Result<RgbaImage, DiagramRenderError> {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_str(markup, &options)
            .map_err(|e| DiagramRenderError::Parse(e.to_string()))?;

        let native = tree.size();
        if native.width() <= 0.0 || native.height() <= 0.0 {
            return Err(DiagramRenderError::EmptyCanvas {
                width: native.width(),
                height: native.height(),
            });
        }

        let zoom = (target_height_px as f32 * self.scale_factor.max(1.0)) / native.height();
        let out_h = (native.height() * zoom).round().max(1.0) as u32;
        let out_w = (native.width() * zoom).round().max(1.0) as u32;

        let mut pixmap = tiny_skia::Pixmap::new(out_w, out_h).ok_or_else(|| {
            DiagramRenderError::Raster(format!("cannot allocate {out_w}x{out_h} pixmap"))
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(zoom, zoom),
            &mut pixmap.as_mut(),
        );

        // The canvas is opaque, so premultiplied and straight alpha agree
        // and the buffer converts losslessly.
        log::debug!("rasterized diagram to {out_w}x{out_h}");
        RgbaImage::from_raw(out_w, out_h, pixmap.take())
            .ok_or_else(|| DiagramRenderError::Raster("pixmap buffer size mismatch".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CIRCLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50">
        <circle cx="25" cy="25" r="20" fill="black"/>
    </svg>"#;

    #[test]
    fn rasterizes_at_target_height_with_native_aspect() {
        let raster = SvgRasterizer::new(1.0).rasterize(CIRCLE_SVG, 70).unwrap();
        assert_eq!(raster.height(), 70);
        assert_eq!(raster.width(), 140);
    }

    #[test]
    fn default_supersampling_doubles_the_raster() {
        let raster = SvgRasterizer::default().rasterize(CIRCLE_SVG, 70).unwrap();
        assert_eq!(raster.height(), 140);
        assert_eq!(raster.width(), 280);
    }

    #[test]
    fn background_is_white() {
        let raster = SvgRasterizer::new(1.0).rasterize(CIRCLE_SVG, 50).unwrap();
        let corner = raster.get_pixel(raster.width() - 1, raster.height() - 1);
        assert_eq!(corner.0, [255, 255, 255, 255]);
    }

    #[test]
    fn garbage_markup_is_a_parse_error() {
        let err = SvgRasterizer::default()
            .rasterize("<p>not svg</p>", 70)
            .unwrap_err();
        assert!(matches!(err, DiagramRenderError::Parse(_)));
    }
}
