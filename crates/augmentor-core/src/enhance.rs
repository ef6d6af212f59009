//! Brightness, contrast and saturation enhancement.
//!
//! All three are the same linear blend around a per-effect neutral image:
//!
//! ```text
//! output = neutral + factor * (input - neutral)
//! ```
//!
//! clamped to `[0, 255]` and truncated. `factor = 1.0` is the identity and
//! short-circuits to a copy; `0.0` yields the neutral itself; values above
//! 1.0 push away from it.
//!
//! | effect     | neutral                                   |
//! |------------|-------------------------------------------|
//! | brightness | black                                     |
//! | contrast   | mean luma of the whole image (one gray)   |
//! | saturation | luma of each pixel (grayscale version)    |

use crate::luminance::{luma_u8, mean_luma};
use crate::Image;

/// Apply brightness, contrast and saturation in that order.
pub fn apply_enhancements(image: &Image, brightness: f32, contrast: f32, saturation: f32) -> Image {
    let img = apply_brightness(image, brightness);
    let img = apply_contrast(&img, contrast);
    apply_saturation(&img, saturation)
}

/// Scale every channel toward (factor < 1) or away from black.
pub fn apply_brightness(image: &Image, factor: f32) -> Image {
    if factor == 1.0 {
        return image.clone();
    }
    map_channels(image, |v| blend(0.0, v, factor))
}

/// Scale every channel around the image's mean gray level.
pub fn apply_contrast(image: &Image, factor: f32) -> Image {
    if factor == 1.0 {
        return image.clone();
    }
    let mean = mean_luma(&image.pixels) as f32;
    map_channels(image, |v| blend(mean, v, factor))
}

/// Scale each pixel's channels around that pixel's own gray value.
pub fn apply_saturation(image: &Image, factor: f32) -> Image {
    if factor == 1.0 {
        return image.clone();
    }
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for px in image.pixels.chunks_exact(3) {
        let gray = luma_u8(px[0], px[1], px[2]) as f32;
        pixels.push(blend(gray, px[0], factor));
        pixels.push(blend(gray, px[1], factor));
        pixels.push(blend(gray, px[2], factor));
    }
    Image {
        width: image.width,
        height: image.height,
        pixels,
    }
}

/// `neutral + factor * (value - neutral)`, clipped and truncated to 8 bits.
#[inline]
pub fn blend(neutral: f32, value: u8, factor: f32) -> u8 {
    let v = neutral + factor * (value as f32 - neutral);
    v.clamp(0.0, 255.0) as u8
}

fn map_channels(image: &Image, f: impl Fn(u8) -> u8) -> Image {
    Image {
        width: image.width,
        height: image.height,
        pixels: image.pixels.iter().map(|&v| f(v)).collect(),
    }
}
