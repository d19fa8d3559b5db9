use image::{DynamicImage, RgbaImage, codecs::jpeg::JpegEncoder};

use crate::domain::image::errors::EncodeError;

/// Still-image quality for camera snapshots (0.92 on a 0..1 scale).
pub const SNAPSHOT_JPEG_QUALITY: u8 = 92;

/// One video frame at native resolution, tightly packed RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn rasterize_jpeg(frame: &RawFrame, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let image = RgbaImage::from_raw(frame.width, frame.height, frame.rgba.clone()).ok_or_else(
        || {
            EncodeError::Malformed(format!(
                "frame buffer of {} bytes does not match {}x{}",
                frame.rgba.len(),
                frame.width,
                frame.height
            ))
        },
    )?;

    let rgb = DynamicImage::ImageRgba8(image).to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .encode_image(&rgb)
        .map_err(|e| EncodeError::Malformed(format!("JPEG encode failed: {e}")))?;

    Ok(buffer)
}
