//! Image XObject embedding.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbaImage;
use lopdf::{Document, ObjectId, Stream, dictionary};
use std::io::Write;

use crate::RenderError;

/// Pixel dimensions of an embedded image, needed for placement math.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedImage {
    pub id: ObjectId,
    pub width: u32,
    pub height: u32,
}

fn is_jpeg(bytes: &[u8]) -> bool {
    bytes.starts_with(&[0xFF, 0xD8])
}

/// Embeds encoded image bytes.
///
/// JPEG sources pass through untouched under DCTDecode; everything else
/// is decoded, flattened over white and stored as FlateDecode raw RGB.
pub fn embed_encoded(doc: &mut Document, bytes: &[u8]) -> Result<EmbeddedImage, RenderError> {
    if is_jpeg(bytes) {
        let (width, height) = image::load_from_memory(bytes)
            .map_err(|e| RenderError::Image(e.to_string()))
            .map(|img| (img.width(), img.height()))?;
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            bytes.to_vec(),
        );
        let id = doc.add_object(stream);
        return Ok(EmbeddedImage { id, width, height });
    }

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| RenderError::Image(e.to_string()))?
        .to_rgba8();
    embed_rgba(doc, &decoded)
}

/// Embeds a decoded RGBA bitmap as FlateDecode raw RGB, flattening alpha
/// over white so transparent diagram backgrounds print correctly.
pub fn embed_rgba(doc: &mut Document, bitmap: &RgbaImage) -> Result<EmbeddedImage, RenderError> {
    let (width, height) = bitmap.dimensions();

    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for px in bitmap.pixels() {
        let a = u16::from(px[3]);
        for c in 0..3 {
            let v = (u16::from(px[c]) * a + 255 * (255 - a) + 127) / 255;
            rgb.push(v as u8);
        }
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(&rgb)?;
    let compressed = encoder.finish()?;

    let stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        compressed,
    );
    let id = doc.add_object(stream);
    Ok(EmbeddedImage { id, width, height })
}

/// XObject resource name for the n-th image on a page.
pub fn image_name(index: usize) -> String {
    format!("Im{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_magic_detection() {
        assert!(is_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(!is_jpeg(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn alpha_flattens_over_white() {
        let mut doc = Document::with_version("1.7");
        let bitmap = RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 0]));
        let embedded = embed_rgba(&mut doc, &bitmap).unwrap();
        assert_eq!((embedded.width, embedded.height), (2, 2));
        // Fully transparent black becomes white in the stored RGB.
        let obj = doc.get_object(embedded.id).unwrap();
        let stream = obj.as_stream().unwrap();
        let data = stream.decompressed_content().unwrap();
        assert!(data.iter().all(|&b| b == 255));
    }
}
