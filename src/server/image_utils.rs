//! Upload decoding and stage-image encoding for the scan endpoint

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{DynamicImage, ImageFormat};
use thiserror::Error;

/// Maximum upload size (10MB)
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("image data is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("upload is not a JPEG or PNG image")]
    UnsupportedFormat,

    #[error("failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("image data is empty")]
    EmptyData,
}

/// Decode raw upload bytes into a color image
pub fn decode_upload(bytes: &[u8]) -> Result<DynamicImage, UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::EmptyData);
    }

    if bytes.len() > MAX_UPLOAD_SIZE {
        return Err(UploadError::TooLarge(bytes.len(), MAX_UPLOAD_SIZE));
    }

    let format = detect_format(bytes)?;

    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| UploadError::DecodeFailed(e.to_string()))
}

/// Detect the image format from magic bytes.
///
/// The upload control accepts JPEG and PNG; anything else is rejected here
/// rather than handed to the decoder.
pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat, UploadError> {
    if bytes.len() < 4 {
        return Err(UploadError::UnsupportedFormat);
    }

    match bytes {
        // PNG: 89 50 4E 47 (0x89 P N G)
        [0x89, 0x50, 0x4E, 0x47, ..] => Ok(ImageFormat::Png),

        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Ok(ImageFormat::Jpeg),

        _ => Err(UploadError::UnsupportedFormat),
    }
}

/// Encode an image as a PNG data URI for the results page
pub fn png_data_uri(img: &DynamicImage) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&buf)))
}
