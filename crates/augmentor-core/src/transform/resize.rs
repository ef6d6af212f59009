//! Proportional resize.
//!
//! Dimensions are truncated, never rounded: a 99x99 image scaled by 0.5
//! becomes 49x49. The resampling itself is delegated to the `image` crate.

use serde::{Deserialize, Serialize};

use crate::{AugmentError, Image};

/// Filter type for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation.
    #[default]
    CatmullRom,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl ResizeFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Compute `(floor(width * factor), floor(height * factor))`.
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> (u32, u32) {
    let w = (width as f64 * factor).floor();
    let h = (height as f64 * factor).floor();
    (w.max(0.0) as u32, h.max(0.0) as u32)
}

/// Resize an image by a uniform scale factor.
///
/// # Errors
///
/// Returns `AugmentError::DimensionCollapse` if either scaled dimension is
/// zero.
pub fn resize_by_factor(
    image: &Image,
    factor: f64,
    filter: ResizeFilter,
) -> Result<Image, AugmentError> {
    let (width, height) = scaled_dimensions(image.width, image.height, factor);
    resize(image, width, height, filter)
}

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `AugmentError::DimensionCollapse` for a zero target dimension.
pub fn resize(
    image: &Image,
    width: u32,
    height: u32,
    filter: ResizeFilter,
) -> Result<Image, AugmentError> {
    if width == 0 || height == 0 {
        return Err(AugmentError::collapse("resize", width, height));
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| AugmentError::collapse("resize", image.width, image.height))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(Image::from_rgb_image(resized))
}
