//! Parameter files and command-line overrides.

use std::path::Path;

use anyhow::Context;
use augmentor_core::{AugmentParams, CropMode, NoiseMode};

/// Load an [`AugmentParams`] JSON document. Missing fields take defaults.
pub fn load_params_file(path: &Path) -> anyhow::Result<AugmentParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Read config file {}", path.display()))?;
    parse_params(&text).with_context(|| format!("Parse config file {}", path.display()))
}

/// Parse an [`AugmentParams`] JSON document.
pub fn parse_params(text: &str) -> anyhow::Result<AugmentParams> {
    let params = serde_json::from_str(text)?;
    Ok(params)
}

/// Parameter flags. A flag that is not given leaves the base value alone.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ParamOverrides {
    /// Resize factor in [0, 1] (0 = no resize)
    #[arg(long)]
    pub resize: Option<f64>,
    /// Rotation in degrees, counter-clockwise
    #[arg(long, allow_negative_numbers = true)]
    pub rotate: Option<f64>,
    /// Brightness factor (1.0 = unchanged)
    #[arg(long)]
    pub brightness: Option<f32>,
    /// Contrast factor (1.0 = unchanged)
    #[arg(long)]
    pub contrast: Option<f32>,
    /// Saturation factor (1.0 = unchanged)
    #[arg(long)]
    pub saturation: Option<f32>,
    /// Crop a random region of every image
    #[arg(long)]
    pub random_crop: bool,
    /// Add Gaussian noise to every image
    #[arg(long)]
    pub noise: bool,
    /// How noise samples are folded into pixels: wrapping, symmetric
    #[arg(long, value_parser = parse_noise_mode)]
    pub noise_mode: Option<NoiseMode>,
    /// How the crop box bottom edge is derived: contained, legacy
    #[arg(long, value_parser = parse_crop_mode)]
    pub crop_mode: Option<CropMode>,
}

impl ParamOverrides {
    /// Apply every given flag on top of `base`.
    pub fn apply(&self, base: AugmentParams) -> AugmentParams {
        let mut params = base;
        if let Some(resize) = self.resize {
            params.resize_factor = Some(resize);
        }
        if let Some(rotate) = self.rotate {
            params.rotation_degrees = rotate;
        }
        if let Some(brightness) = self.brightness {
            params.brightness = brightness;
        }
        if let Some(contrast) = self.contrast {
            params.contrast = contrast;
        }
        if let Some(saturation) = self.saturation {
            params.saturation = saturation;
        }
        params.random_crop |= self.random_crop;
        params.add_noise |= self.noise;
        if let Some(mode) = self.noise_mode {
            params.noise_mode = mode;
        }
        if let Some(mode) = self.crop_mode {
            params.crop_mode = mode;
        }
        params
    }
}

fn parse_noise_mode(s: &str) -> Result<NoiseMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "wrapping" => Ok(NoiseMode::Wrapping),
        "symmetric" => Ok(NoiseMode::Symmetric),
        other => Err(format!("unknown noise mode '{}' (expected wrapping or symmetric)", other)),
    }
}

fn parse_crop_mode(s: &str) -> Result<CropMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "contained" => Ok(CropMode::Contained),
        "legacy" => Ok(CropMode::Legacy),
        other => Err(format!("unknown crop mode '{}' (expected contained or legacy)", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augmentor_core::ResizeFilter;

    #[test]
    fn parse_partial_document() {
        let params = parse_params(
            r#"{"brightness": 1.5, "random_crop": true, "noise_mode": "symmetric", "resize_filter": "nearest"}"#,
        )
        .unwrap();
        assert_eq!(params.brightness, 1.5);
        assert!(params.random_crop);
        assert_eq!(params.noise_mode, NoiseMode::Symmetric);
        assert_eq!(params.resize_filter, ResizeFilter::Nearest);
        // Untouched fields keep defaults
        assert_eq!(params.contrast, 1.0);
        assert_eq!(params.resize_factor, None);
        assert!(!params.add_noise);
    }

    #[test]
    fn parse_empty_document_is_default() {
        assert_eq!(parse_params("{}").unwrap(), AugmentParams::default());
    }

    #[test]
    fn parse_rejects_bad_types() {
        assert!(parse_params(r#"{"brightness": "bright"}"#).is_err());
        assert!(parse_params(r#"{"crop_mode": "sideways"}"#).is_err());
    }

    #[test]
    fn load_missing_file_has_context() {
        let err = load_params_file(Path::new("/nonexistent/params.json")).unwrap_err();
        assert!(err.to_string().contains("Read config file"));
    }

    #[test]
    fn load_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{"rotation_degrees": 30.0, "add_noise": true}"#).unwrap();
        let params = load_params_file(&path).unwrap();
        assert_eq!(params.rotation_degrees, 30.0);
        assert!(params.add_noise);
    }

    #[test]
    fn overrides_replace_given_fields_only() {
        let base = AugmentParams::new(Some(0.5), 10.0, 1.2, 0.8, 1.1, true, false);
        let overrides = ParamOverrides {
            rotate: Some(-45.0),
            saturation: Some(2.0),
            noise: true,
            crop_mode: Some(CropMode::Legacy),
            ..Default::default()
        };
        let params = overrides.apply(base);
        assert_eq!(params.resize_factor, Some(0.5));
        assert_eq!(params.rotation_degrees, -45.0);
        assert_eq!(params.brightness, 1.2);
        assert_eq!(params.saturation, 2.0);
        assert!(params.random_crop);
        assert!(params.add_noise);
        assert_eq!(params.crop_mode, CropMode::Legacy);
        assert_eq!(params.noise_mode, NoiseMode::Wrapping);
    }

    #[test]
    fn empty_overrides_keep_base() {
        let base = AugmentParams::new(None, 5.0, 0.9, 1.0, 1.0, false, true);
        assert_eq!(ParamOverrides::default().apply(base.clone()), base);
    }

    #[test]
    fn mode_parsers() {
        assert_eq!(parse_noise_mode("Symmetric"), Ok(NoiseMode::Symmetric));
        assert_eq!(parse_crop_mode("legacy"), Ok(CropMode::Legacy));
        assert!(parse_noise_mode("loud").is_err());
        assert!(parse_crop_mode("").is_err());
    }
}
