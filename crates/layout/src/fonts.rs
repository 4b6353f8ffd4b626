//! Text measurement capability.
//!
//! The flow engine only needs horizontal advance widths, never shaped
//! glyphs: wrapping Base-14 Helvetica at report sizes is a pure
//! advance-sum problem. [`FaceMetrics`] reads advances from a real font
//! face via ttf-parser (discovered through fontdb on native platforms);
//! [`ApproxMetrics`] is the documented average-character-width estimate
//! used when no face is available and in deterministic tests.

use std::fmt::Debug;
use std::sync::Arc;

/// Millimeters per point.
const MM_PER_PT: f32 = 25.4 / 72.0;

/// Measures text width for the wrap algorithm.
///
/// `font_size` is in nominal points; results are millimeters, matching
/// page coordinates.
pub trait FontMetrics: Send + Sync + Debug {
    /// Advance width of `text` on one line at `font_size`.
    fn text_width(&self, text: &str, font_size: f32) -> f32;

    /// Number of wrapped lines `text` occupies at `max_width` mm.
    fn measure_wrapped_lines(&self, text: &str, font_size: f32, max_width: f32) -> usize {
        crate::wrap::wrap_lines(self, text, font_size, max_width).len()
    }
}

/// Fixed average-character-width estimate.
///
/// An approximation, not a correctness guarantee: real Helvetica averages
/// just under half an em per glyph at body sizes, which this reproduces
/// closely enough for page-break decisions.
#[derive(Debug, Clone, Copy)]
pub struct ApproxMetrics {
    /// Average glyph advance in em units.
    pub avg_char_em: f32,
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self { avg_char_em: 0.5 }
    }
}

impl FontMetrics for ApproxMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.avg_char_em * font_size * MM_PER_PT
    }
}

/// Advance-width metrics backed by a parsed font face.
///
/// Holds the raw font bytes and re-parses the face header per call, the
/// same cheap-view approach the font cache takes elsewhere; this sidesteps
/// a self-referential struct without unsafe.
#[derive(Clone)]
pub struct FaceMetrics {
    data: Arc<Vec<u8>>,
    index: u32,
    fallback: ApproxMetrics,
}

impl Debug for FaceMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceMetrics")
            .field("data_len", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl FaceMetrics {
    /// Builds metrics from raw font bytes, validating that the face
    /// parses.
    pub fn from_bytes(data: Arc<Vec<u8>>, index: u32) -> Option<Self> {
        ttf_parser::Face::parse(&data, index).ok()?;
        Some(Self {
            data,
            index,
            fallback: ApproxMetrics::default(),
        })
    }

    /// Locates a sans-serif face through system font discovery.
    #[cfg(feature = "system-fonts")]
    pub fn from_system_sans() -> Option<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let query = fontdb::Query {
            families: &[
                fontdb::Family::Name("Helvetica"),
                fontdb::Family::Name("Arial"),
                fontdb::Family::SansSerif,
            ],
            ..Default::default()
        };
        let id = db.query(&query)?;
        db.with_face_data(id, |data, index| {
            Self::from_bytes(Arc::new(data.to_vec()), index)
        })?
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.index).ok()
    }
}

impl FontMetrics for FaceMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let Some(face) = self.face() else {
            return self.fallback.text_width(text, font_size);
        };
        let upem = f32::from(face.units_per_em());
        if upem <= 0.0 {
            return self.fallback.text_width(text, font_size);
        }

        let mut units = 0.0f32;
        for ch in text.chars() {
            let advance = face
                .glyph_index(ch)
                .and_then(|gid| face.glyph_hor_advance(gid))
                .map(f32::from)
                // Unmapped characters get an average advance so exotic
                // input still wraps reasonably.
                .unwrap_or(upem * self.fallback.avg_char_em);
            units += advance;
        }
        units / upem * font_size * MM_PER_PT
    }
}

/// The best metrics available on this platform: a discovered system sans
/// face, else the average-width estimate (logged, since page breaks will
/// be approximate).
pub fn default_metrics() -> Box<dyn FontMetrics> {
    #[cfg(feature = "system-fonts")]
    if let Some(face) = FaceMetrics::from_system_sans() {
        return Box::new(face);
    }
    log::warn!("no system font available for measurement; using average-width estimate");
    Box::new(ApproxMetrics::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_width_scales_with_length_and_size() {
        let m = ApproxMetrics::default();
        let short = m.text_width("abc", 10.0);
        let long = m.text_width("abcdef", 10.0);
        assert!((long - 2.0 * short).abs() < 1e-5);
        assert!(m.text_width("abc", 20.0) > m.text_width("abc", 10.0));
    }

    #[test]
    fn approx_empty_text_is_zero() {
        assert_eq!(ApproxMetrics::default().text_width("", 10.0), 0.0);
    }

    #[test]
    fn face_metrics_rejects_garbage() {
        assert!(FaceMetrics::from_bytes(Arc::new(vec![0u8; 16]), 0).is_none());
    }
}
