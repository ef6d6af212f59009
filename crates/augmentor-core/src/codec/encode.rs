use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{CodecError, ImageFormat};
use crate::Image;

/// JPEG quality used when writing augmented copies.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Encode an image into `format`.
///
/// # Errors
///
/// Returns `CodecError::InvalidPixelData` if the buffer length does not
/// match the dimensions, or `CodecError::EncodingFailed` if the encoder
/// rejects the image (for example a zero dimension).
pub fn encode_image(image: &Image, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    let expected = image.pixel_count() * 3;
    if image.pixels.len() != expected {
        return Err(CodecError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let result = match format {
        ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, DEFAULT_JPEG_QUALITY)
            .write_image(&image.pixels, image.width, image.height, ExtendedColorType::Rgb8),
        ImageFormat::Png => PngEncoder::new(&mut buffer).write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgb8,
        ),
    };
    result.map_err(|e| CodecError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode `image` in the format named by `path`'s extension and write it.
///
/// # Errors
///
/// Returns `CodecError::UnsupportedExtension` for anything other than
/// jpg, jpeg or png, plus any encoding or I/O error.
pub fn save_image(image: &Image, path: &Path) -> Result<(), CodecError> {
    let format = ImageFormat::from_path(path).ok_or_else(|| {
        CodecError::UnsupportedExtension(
            path.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    })?;
    let bytes = encode_image(image, format)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg_markers() {
        let img = Image::filled(10, 10, [128, 128, 128]);
        let bytes = encode_image(&img, ImageFormat::Jpeg).unwrap();
        // SOI and EOI markers
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_png_signature() {
        let img = Image::filled(3, 3, [1, 2, 3]);
        let bytes = encode_image(&img, ImageFormat::Png).unwrap();
        assert_eq!(&bytes[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_rejects_short_buffer() {
        let img = Image {
            width: 4,
            height: 4,
            pixels: vec![0; 10],
        };
        let result = encode_image(&img, ImageFormat::Png);
        assert!(matches!(
            result,
            Err(CodecError::InvalidPixelData {
                expected: 48,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let img = Image::filled(2, 2, [0, 0, 0]);
        let result = save_image(&img, Path::new("out.bmp"));
        assert!(matches!(result, Err(CodecError::UnsupportedExtension(ext)) if ext == "bmp"));
    }
}
