//! The parameter set for one batch run.
//!
//! An [`AugmentParams`] value is built once and then only read. The engine
//! takes it by reference, so nothing a call does can leak into the next one.

use serde::{Deserialize, Serialize};

use crate::noise::NoiseMode;
use crate::transform::{CropMode, InterpolationFilter, ResizeFilter};
use crate::AugmentError;

/// Default noise standard deviation on the 0-255 scale.
pub const DEFAULT_NOISE_SIGMA: f64 = 25.0;

/// Every knob that controls one augmentation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentParams {
    /// Scale factor in (0, 1]. `None` (or `0.0`) skips the resize.
    pub resize_factor: Option<f64>,
    /// Rotation in degrees, positive = counter-clockwise. `0.0` skips.
    pub rotation_degrees: f64,
    /// Brightness factor (1.0 = unchanged, 0.0 = black)
    pub brightness: f32,
    /// Contrast factor (1.0 = unchanged, 0.0 = flat mean gray)
    pub contrast: f32,
    /// Saturation factor (1.0 = unchanged, 0.0 = grayscale)
    pub saturation: f32,
    /// Crop a random sub-region after the deterministic stage
    pub random_crop: bool,
    /// Add Gaussian noise as the final stage
    pub add_noise: bool,
    pub resize_filter: ResizeFilter,
    pub rotation_filter: InterpolationFilter,
    pub crop_mode: CropMode,
    pub noise_mode: NoiseMode,
    /// Noise standard deviation (0-255 scale)
    pub noise_sigma: f64,
}

impl Default for AugmentParams {
    fn default() -> Self {
        Self {
            resize_factor: None,
            rotation_degrees: 0.0,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            random_crop: false,
            add_noise: false,
            resize_filter: ResizeFilter::default(),
            rotation_filter: InterpolationFilter::default(),
            crop_mode: CropMode::default(),
            noise_mode: NoiseMode::default(),
            noise_sigma: DEFAULT_NOISE_SIGMA,
        }
    }
}

impl AugmentParams {
    /// Build a parameter set from the seven primary knobs.
    ///
    /// Filters and modes take their defaults; use struct update syntax to
    /// override them.
    pub fn new(
        resize_factor: Option<f64>,
        rotation_degrees: f64,
        brightness: f32,
        contrast: f32,
        saturation: f32,
        random_crop: bool,
        add_noise: bool,
    ) -> Self {
        Self {
            resize_factor,
            rotation_degrees,
            brightness,
            contrast,
            saturation,
            random_crop,
            add_noise,
            ..Self::default()
        }
    }

    /// Check if the parameter set leaves every image untouched.
    pub fn is_identity(&self) -> bool {
        self.effective_resize().is_none()
            && self.rotation_degrees == 0.0
            && self.brightness == 1.0
            && self.contrast == 1.0
            && self.saturation == 1.0
            && !self.random_crop
            && !self.add_noise
    }

    /// The resize factor that will actually be applied.
    ///
    /// `Some(0.0)` is treated like `None`: a zero factor means "no resize".
    pub fn effective_resize(&self) -> Option<f64> {
        self.resize_factor.filter(|f| *f != 0.0)
    }

    /// Reject values the engine cannot interpret.
    ///
    /// Enhancement factors may be negative or very large (the output is
    /// clipped) but must be finite.
    pub fn validate(&self) -> Result<(), AugmentError> {
        if let Some(f) = self.effective_resize() {
            if !f.is_finite() || f <= 0.0 || f > 1.0 {
                return Err(AugmentError::invalid(
                    "resize_factor",
                    format!("must be in (0, 1], got {}", f),
                ));
            }
        }
        if !self.rotation_degrees.is_finite() {
            return Err(AugmentError::invalid(
                "rotation_degrees",
                format!("must be a finite number, got {}", self.rotation_degrees),
            ));
        }
        for (name, value) in [
            ("brightness", self.brightness),
            ("contrast", self.contrast),
            ("saturation", self.saturation),
        ] {
            if !value.is_finite() {
                return Err(AugmentError::invalid(
                    name,
                    format!("must be a finite number, got {}", value),
                ));
            }
        }
        if self.add_noise && !(self.noise_sigma.is_finite() && self.noise_sigma > 0.0) {
            return Err(AugmentError::invalid(
                "noise_sigma",
                format!("must be a positive finite number, got {}", self.noise_sigma),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let params = AugmentParams::default();
        assert!(params.is_identity());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_new_sets_primary_knobs() {
        let params = AugmentParams::new(Some(0.5), 30.0, 1.2, 0.8, 2.0, true, true);
        assert_eq!(params.resize_factor, Some(0.5));
        assert_eq!(params.rotation_degrees, 30.0);
        assert_eq!(params.brightness, 1.2);
        assert_eq!(params.contrast, 0.8);
        assert_eq!(params.saturation, 2.0);
        assert!(params.random_crop);
        assert!(params.add_noise);
        assert_eq!(params.noise_sigma, DEFAULT_NOISE_SIGMA);
        assert_eq!(params.crop_mode, CropMode::Contained);
        assert_eq!(params.noise_mode, NoiseMode::Wrapping);
    }

    #[test]
    fn test_zero_resize_means_no_resize() {
        let params = AugmentParams::new(Some(0.0), 0.0, 1.0, 1.0, 1.0, false, false);
        assert_eq!(params.effective_resize(), None);
        assert!(params.validate().is_ok());
        assert!(params.is_identity());
    }

    #[test]
    fn test_resize_out_of_range_rejected() {
        for bad in [1.5, -0.25, f64::NAN, f64::INFINITY] {
            let params = AugmentParams::new(Some(bad), 0.0, 1.0, 1.0, 1.0, false, false);
            assert!(
                matches!(
                    params.validate(),
                    Err(AugmentError::InvalidParameter { name: "resize_factor", .. })
                ),
                "resize {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_resize_upper_bound_inclusive() {
        let params = AugmentParams::new(Some(1.0), 0.0, 1.0, 1.0, 1.0, false, false);
        assert!(params.validate().is_ok());
        assert!(!params.is_identity());
    }

    #[test]
    fn test_non_finite_factors_rejected() {
        let mut params = AugmentParams::default();
        params.contrast = f32::NAN;
        assert!(matches!(
            params.validate(),
            Err(AugmentError::InvalidParameter { name: "contrast", .. })
        ));

        let mut params = AugmentParams::default();
        params.rotation_degrees = f64::NEG_INFINITY;
        assert!(matches!(
            params.validate(),
            Err(AugmentError::InvalidParameter { name: "rotation_degrees", .. })
        ));
    }

    #[test]
    fn test_extreme_factors_accepted() {
        let params = AugmentParams::new(None, -720.0, -3.0, 50.0, 0.0, false, false);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_noise_sigma_checked_only_when_noise_enabled() {
        let mut params = AugmentParams::default();
        params.noise_sigma = 0.0;
        assert!(params.validate().is_ok());

        params.add_noise = true;
        assert!(matches!(
            params.validate(),
            Err(AugmentError::InvalidParameter { name: "noise_sigma", .. })
        ));
    }
}
