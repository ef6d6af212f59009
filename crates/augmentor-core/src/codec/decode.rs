use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::CodecError;
use crate::Image;

/// Decode JPEG or PNG bytes into an RGB image.
///
/// The format is sniffed from the content, not from any file name.
///
/// # Errors
///
/// Returns `CodecError::InvalidFormat` if the format cannot be recognized
/// and `CodecError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<Image, CodecError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(CodecError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;

    Ok(Image::from_rgb_image(img.into_rgb8()))
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<Image, CodecError> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}
