//! Randomized cropping.
//!
//! A crop keeps between 50% and 100% of each dimension. The size is drawn
//! first, then the top-left corner is drawn from the offsets that keep the
//! region inside the source.
//!
//! # Coordinate System
//!
//! - Crop boxes are in pixels: `left`/`top` inclusive, `right`/`bottom` exclusive
//! - Origin is the top-left corner

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::transform::rotation::FILL_COLOR;
use crate::{AugmentError, Image};

/// How the bottom edge of a random crop box is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropMode {
    /// `bottom = top + new_height`; the box always lies inside the source.
    #[default]
    Contained,
    /// `bottom = right + new_height`, as older augmentation runs computed it.
    ///
    /// The box is displaced vertically by the horizontal extent and may run
    /// past the bottom edge; rows past the edge are filled with black.
    Legacy,
}

/// A pixel rectangle. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    /// Width of the box (0 if `right <= left`).
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height of the box (0 if `bottom <= top`).
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Check if the box lies entirely inside a `width x height` image.
    pub fn is_contained_in(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }
}

/// Draw a crop box for a `width x height` image.
///
/// Draw order is fixed: new width, new height, left, top. Every draw is
/// inclusive on both ends.
pub fn sample_crop_box<R: RandomSource + ?Sized>(
    width: u32,
    height: u32,
    mode: CropMode,
    rng: &mut R,
) -> CropBox {
    let new_width = rng.uniform_inclusive(width / 2, width);
    let new_height = rng.uniform_inclusive(height / 2, height);

    let left = rng.uniform_inclusive(0, width - new_width);
    let top = rng.uniform_inclusive(0, height - new_height);

    let right = left + new_width;
    let bottom = match mode {
        CropMode::Contained => top + new_height,
        CropMode::Legacy => right + new_height,
    };

    let crop = CropBox {
        left,
        top,
        right,
        bottom,
    };
    debug_assert!(
        mode == CropMode::Legacy || crop.is_contained_in(width, height),
        "contained crop {:?} escapes {}x{}",
        crop,
        width,
        height
    );
    crop
}

/// Copy the pixels inside `crop` into a new image.
///
/// Parts of the box outside the source are filled with black.
///
/// # Errors
///
/// Returns `AugmentError::DimensionCollapse` if the box is empty.
pub fn extract_region(image: &Image, crop: CropBox) -> Result<Image, AugmentError> {
    let out_width = crop.width();
    let out_height = crop.height();
    if out_width == 0 || out_height == 0 {
        return Err(AugmentError::collapse("random crop", out_width, out_height));
    }

    let mut output = Vec::with_capacity(out_width as usize * out_height as usize * 3);

    for y in 0..out_height {
        let src_y = crop.top + y;
        if src_y >= image.height {
            for _ in 0..out_width {
                output.extend_from_slice(&FILL_COLOR);
            }
            continue;
        }

        let row_start = src_y as usize * image.width as usize * 3;
        let copy_end = crop.right.min(image.width);
        if crop.left < copy_end {
            let start = row_start + crop.left as usize * 3;
            let end = row_start + copy_end as usize * 3;
            output.extend_from_slice(&image.pixels[start..end]);
        }
        for _ in copy_end.max(crop.left)..crop.right {
            output.extend_from_slice(&FILL_COLOR);
        }
    }

    Ok(Image {
        width: out_width,
        height: out_height,
        pixels: output,
    })
}

/// Crop a randomly sized and positioned region out of `image`.
///
/// # Errors
///
/// Returns `AugmentError::DimensionCollapse` if the sampled region is
/// empty, which can only happen for sources 1 pixel wide or high (or for
/// a degenerate legacy box).
pub fn random_crop<R: RandomSource + ?Sized>(
    image: &Image,
    mode: CropMode,
    rng: &mut R,
) -> Result<Image, AugmentError> {
    if image.is_empty() {
        return Err(AugmentError::collapse("random crop", image.width, image.height));
    }
    let crop = sample_crop_box(image.width, image.height, mode, rng);
    tracing::trace!(?crop, ?mode, "sampled crop box");
    extract_region(image, crop)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
