//! Reading and writing image files.
//!
//! The engine works on [`Image`](crate::Image) buffers only. This module is
//! the boundary to JPEG and PNG files: every decoded image is converted to
//! 8-bit RGB (alpha and palette information are dropped) and every encoded
//! image is written in the format named by the destination extension.
//!
//! EXIF orientation is not applied; pixels are used in stored order.

mod decode;
mod encode;

pub use decode::{decode_image, load_image};
pub use encode::{encode_image, save_image, DEFAULT_JPEG_QUALITY};

use std::path::Path;

use thiserror::Error;

/// Errors raised while reading or writing image files.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The bytes are not a recognized image.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image was recognized but could not be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The destination extension does not name a supported format.
    #[error("Unsupported output extension: {0:?}")]
    UnsupportedExtension(String),

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Encoding failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// I/O error while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// File formats the batch runner reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Map a file extension (case-insensitive, without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    /// Map a path's extension to a format.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Check if `path` has one of the accepted input extensions.
pub fn is_supported_path(path: &Path) -> bool {
    ImageFormat::from_path(path).is_some()
}
