//! Gaussian noise injection.
//!
//! Every channel of every pixel gets an independent sample of
//! `N(0, sigma)`. How a sample is combined with the pixel depends on
//! [`NoiseMode`]:
//!
//! - `Wrapping` stores the float samples in an unsigned 8-bit buffer and
//!   adds the two 8-bit buffers, as earlier augmentation runs did. Both
//!   steps are modulo 256: truncation toward zero turns `-3.7` into `253`,
//!   and `100 + 253` wraps back to `97`. Small samples therefore nudge a
//!   channel either way, while a channel near 0 or 255 can flip to the
//!   other end.
//! - `Symmetric` adds the rounded signed sample and clips, giving zero-mean
//!   noise.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::Image;

/// How noise samples are folded into 8-bit pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseMode {
    /// Sample wrapped into `u8`, then a wrapping 8-bit add.
    #[default]
    Wrapping,
    /// Signed sample added, result clipped to `[0, 255]`.
    Symmetric,
}

/// Fold a float sample into `u8` the way an unchecked float-to-uint8 cast
/// does: truncate toward zero, keep the low 8 bits.
#[inline]
pub fn wrap_sample(sample: f64) -> u8 {
    // f64 -> i64 truncates (and saturates far outside the range),
    // i64 -> u8 keeps the low byte.
    sample as i64 as u8
}

/// Return a copy of `image` with Gaussian noise added to every channel.
///
/// `sigma` is on the 0-255 scale. Fresh samples are drawn from `rng` on
/// every call.
pub fn add_gaussian_noise<R: RandomSource + ?Sized>(
    image: &Image,
    sigma: f64,
    mode: NoiseMode,
    rng: &mut R,
) -> Image {
    let pixels = image
        .pixels
        .iter()
        .map(|&v| {
            let sample = sigma * rng.standard_normal();
            match mode {
                NoiseMode::Wrapping => v.wrapping_add(wrap_sample(sample)),
                NoiseMode::Symmetric => (v as f64 + sample.round()).clamp(0.0, 255.0) as u8,
            }
        })
        .collect();

    Image {
        width: image.width,
        height: image.height,
        pixels,
    }
}
