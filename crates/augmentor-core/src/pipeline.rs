//! The augmentation entry point.
//!
//! ## Stage Order
//! 1. Resize
//! 2. Rotation
//! 3. Brightness
//! 4. Contrast
//! 5. Saturation
//! 6. Random crop (if enabled)
//! 7. Gaussian noise (if enabled)

use crate::enhance::apply_enhancements;
use crate::noise::add_gaussian_noise;
use crate::random::RandomSource;
use crate::transform::{apply_rotation, random_crop, resize_by_factor};
use crate::{AugmentError, AugmentParams, Image};

/// Run the deterministic stages: resize, rotate, then enhance.
///
/// # Errors
///
/// Returns `AugmentError::DimensionCollapse` if the resize truncates a
/// dimension to zero.
pub fn apply_deterministic(image: &Image, params: &AugmentParams) -> Result<Image, AugmentError> {
    let mut img = match params.effective_resize() {
        Some(factor) => {
            let resized = resize_by_factor(image, factor, params.resize_filter)?;
            tracing::debug!(factor, width = resized.width, height = resized.height, "resized");
            resized
        }
        None => image.clone(),
    };

    if params.rotation_degrees != 0.0 {
        img = apply_rotation(&img, params.rotation_degrees, params.rotation_filter);
        tracing::debug!(degrees = params.rotation_degrees, "rotated");
    }

    Ok(apply_enhancements(
        &img,
        params.brightness,
        params.contrast,
        params.saturation,
    ))
}

/// Produce one augmented copy of `image`.
///
/// The parameter set is validated first. Random draws for the crop and the
/// noise come from `rng` only, so two calls with identically seeded
/// generators return identical images.
///
/// # Errors
///
/// - `AugmentError::InvalidParameter` if `params` fails validation
/// - `AugmentError::DimensionCollapse` if the input is empty or a resize
///   or crop leaves no pixels
pub fn apply_transformations<R: RandomSource + ?Sized>(
    image: &Image,
    params: &AugmentParams,
    rng: &mut R,
) -> Result<Image, AugmentError> {
    params.validate()?;
    if image.is_empty() {
        return Err(AugmentError::collapse("input", image.width, image.height));
    }
    if params.is_identity() {
        return Ok(image.clone());
    }

    let mut img = apply_deterministic(image, params)?;

    if params.random_crop {
        img = random_crop(&img, params.crop_mode, rng)?;
        tracing::debug!(width = img.width, height = img.height, "cropped");
    }

    if params.add_noise {
        img = add_gaussian_noise(&img, params.noise_sigma, params.noise_mode, rng);
        tracing::debug!(sigma = params.noise_sigma, mode = ?params.noise_mode, "noise added");
    }

    Ok(img)
}
