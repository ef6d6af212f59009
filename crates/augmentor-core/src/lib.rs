//! Augmentor Core - image augmentation engine
//!
//! This crate turns one RGB image into a transformed copy according to a
//! fixed [`AugmentParams`] set: proportional resize, rotation, brightness,
//! contrast and saturation enhancement, an optional random crop and optional
//! Gaussian noise. The [`codec`] module reads and writes JPEG and PNG files.
//!
//! Random draws come from a caller-supplied [`RandomSource`], so a seeded
//! generator reproduces a run exactly.

pub mod codec;
pub mod enhance;
pub mod luminance;
pub mod noise;
pub mod params;
pub mod pipeline;
pub mod random;
pub mod transform;
mod types;

pub use codec::{decode_image, encode_image, load_image, save_image, CodecError, ImageFormat};
pub use enhance::apply_enhancements;
pub use noise::{add_gaussian_noise, NoiseMode};
pub use params::{AugmentParams, DEFAULT_NOISE_SIGMA};
pub use pipeline::{apply_deterministic, apply_transformations};
pub use random::RandomSource;
pub use transform::{
    apply_rotation, random_crop, resize_by_factor, CropBox, CropMode, InterpolationFilter,
    ResizeFilter,
};
pub use types::{AugmentError, Image};
