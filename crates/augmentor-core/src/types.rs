//! Core types shared by every stage of the engine.

use thiserror::Error;

/// Errors raised by the transformation engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AugmentError {
    /// A parameter is outside its accepted domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A stage would produce (or was handed) an image with no pixels.
    #[error("{stage} produced an empty image ({width}x{height})")]
    DimensionCollapse {
        stage: &'static str,
        width: u32,
        height: u32,
    },
}

impl AugmentError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AugmentError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn collapse(stage: &'static str, width: u32, height: u32) -> Self {
        AugmentError::DimensionCollapse {
            stage,
            width,
            height,
        }
    }
}

/// An 8-bit RGB raster.
///
/// Stages never mutate an `Image` they receive; each one returns a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl Image {
    /// Create a new Image with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self::new(width, height, pixels)
    }

    /// Create an Image from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for resampling or encoding.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let img = Image::new(100, 50, vec![0u8; 100 * 50 * 3]);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_image_empty() {
        let img = Image::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_filled_repeats_color() {
        let img = Image::filled(3, 2, [10, 20, 30]);
        assert_eq!(img.pixels.len(), 18);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(img.pixel(x, y), [10, 20, 30]);
            }
        }
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let img = Image::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        let rgb = img.to_rgb_image().unwrap();
        assert_eq!(rgb.get_pixel(1, 0).0, [4, 5, 6]);
        assert_eq!(Image::from_rgb_image(rgb), img);
    }

    #[test]
    fn test_error_display() {
        let err = AugmentError::invalid("resize_factor", "must be in (0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `resize_factor`: must be in (0, 1], got 1.5"
        );

        let err = AugmentError::collapse("resize", 0, 12);
        assert_eq!(err.to_string(), "resize produced an empty image (0x12)");
    }
}
