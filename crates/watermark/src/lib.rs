//! Watermark compositor for generated imagery.
//!
//! Every AI-generated image the product shows or exports passes through
//! [`WatermarkSpec::apply`], which blends the brand mark into a corner at a
//! size relative to the source. The operation is pure: neither input is
//! mutated and concurrent invocations are independent.
//!
//! Decode/encode failures surface as [`WatermarkError`]; falling back to
//! the unwatermarked source is a call-site decision, not this crate's.

use image::imageops::FilterType;
use image::{DynamicImage, Pixel, Rgba, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatermarkError {
    #[error("Failed to decode source image: {0}")]
    DecodeSource(#[source] image::ImageError),

    #[error("Failed to decode watermark asset: {0}")]
    DecodeAsset(#[source] image::ImageError),

    #[error("Failed to encode composited image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Which corner of the source the watermark anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Process-wide watermarking parameters plus the decoded mark asset.
///
/// Built once at startup and shared read-only across all compositing
/// calls.
#[derive(Debug, Clone)]
pub struct WatermarkSpec {
    asset: RgbaImage,
    /// Watermark width as a fraction of the source width, in `(0, 1]`.
    pub relative_width: f32,
    /// Edge padding as a fraction of the corresponding source dimension.
    pub padding_fraction: f32,
    /// Global alpha applied to the mark, in `[0, 1]`.
    pub opacity: f32,
    pub anchor: Corner,
}

impl WatermarkSpec {
    pub const DEFAULT_RELATIVE_WIDTH: f32 = 0.15;
    pub const DEFAULT_PADDING_FRACTION: f32 = 0.03;
    pub const DEFAULT_OPACITY: f32 = 0.7;

    /// Decodes the mark asset and builds a spec with the product defaults.
    pub fn new(asset_bytes: &[u8]) -> Result<Self, WatermarkError> {
        let asset = image::load_from_memory(asset_bytes)
            .map_err(WatermarkError::DecodeAsset)?
            .to_rgba8();
        Ok(Self {
            asset,
            relative_width: Self::DEFAULT_RELATIVE_WIDTH,
            padding_fraction: Self::DEFAULT_PADDING_FRACTION,
            opacity: Self::DEFAULT_OPACITY,
            anchor: Corner::BottomRight,
        })
    }

    /// Builds a spec from an already decoded mark.
    pub fn from_image(asset: RgbaImage) -> Self {
        Self {
            asset,
            relative_width: Self::DEFAULT_RELATIVE_WIDTH,
            padding_fraction: Self::DEFAULT_PADDING_FRACTION,
            opacity: Self::DEFAULT_OPACITY,
            anchor: Corner::BottomRight,
        }
    }

    pub fn with_relative_width(mut self, relative_width: f32) -> Self {
        self.relative_width = relative_width;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_anchor(mut self, anchor: Corner) -> Self {
        self.anchor = anchor;
        self
    }

    /// Scaled mark size and anchor position for a source of `w` x `h`.
    ///
    /// The mark width is `w * relative_width` with aspect-preserved
    /// height; padding scales with each axis of the source.
    pub fn placement(&self, w: u32, h: u32) -> (u32, u32, i64, i64) {
        let mark_w = (w as f32 * self.relative_width).round().max(1.0);
        let native_aspect = self.asset.height() as f32 / self.asset.width() as f32;
        let mark_h = (mark_w * native_aspect).round().max(1.0);
        let pad_x = (w as f32 * self.padding_fraction).round();
        let pad_y = (h as f32 * self.padding_fraction).round();

        let x = match self.anchor {
            Corner::TopLeft | Corner::BottomLeft => pad_x,
            Corner::TopRight | Corner::BottomRight => w as f32 - mark_w - pad_x,
        };
        let y = match self.anchor {
            Corner::TopLeft | Corner::TopRight => pad_y,
            Corner::BottomLeft | Corner::BottomRight => h as f32 - mark_h - pad_y,
        };

        (mark_w as u32, mark_h as u32, x as i64, y as i64)
    }

    /// Composites the mark onto `source_bytes` and re-encodes as PNG at
    /// the source's native resolution.
    pub fn apply(&self, source_bytes: &[u8]) -> Result<Vec<u8>, WatermarkError> {
        let source = image::load_from_memory(source_bytes)
            .map_err(WatermarkError::DecodeSource)?
            .to_rgba8();
        let out = self.composite(&source);
        log::debug!(
            "watermarked {}x{} image at {:?}",
            out.width(),
            out.height(),
            self.anchor
        );

        let mut encoded = Vec::new();
        DynamicImage::ImageRgba8(out)
            .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
            .map_err(WatermarkError::Encode)?;
        Ok(encoded)
    }

    /// Compositing core on decoded buffers. Returns a new image; the
    /// source is untouched.
    pub fn composite(&self, source: &RgbaImage) -> RgbaImage {
        let (w, h) = source.dimensions();
        let (mark_w, mark_h, x0, y0) = self.placement(w, h);

        let mark = image::imageops::resize(&self.asset, mark_w, mark_h, FilterType::Triangle);

        let mut out = source.clone();
        let opacity = self.opacity.clamp(0.0, 1.0);
        for (mx, my, px) in mark.enumerate_pixels() {
            let dx = x0 + i64::from(mx);
            let dy = y0 + i64::from(my);
            if dx < 0 || dy < 0 || dx >= i64::from(w) || dy >= i64::from(h) {
                continue;
            }
            let alpha = (f32::from(px[3]) * opacity).round() as u8;
            if alpha == 0 {
                continue;
            }
            let src = Rgba([px[0], px[1], px[2], alpha]);
            out.get_pixel_mut(dx as u32, dy as u32).blend(&src);
        }
        out
    }
}

/// Free-function form of [`WatermarkSpec::apply`], the surface the export
/// pipeline binds to.
pub fn add_watermark(spec: &WatermarkSpec, source_bytes: &[u8]) -> Result<Vec<u8>, WatermarkError> {
    spec.apply(source_bytes)
}
