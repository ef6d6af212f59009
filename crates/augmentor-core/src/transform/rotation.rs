//! In-place-canvas rotation about the image centre.
//!
//! The output always has the same dimensions as the input. Corners that
//! rotate out of the frame are lost and the uncovered area is filled with
//! [`FILL_COLOR`].
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each output pixel centre we
//! compute the source position it comes from and sample there. For an
//! angle θ (counter-clockwise on screen, y axis pointing down):
//!
//! ```text
//! src_x = cos θ * (dst_x + 0.5 - cx) - sin θ * (dst_y + 0.5 - cy) + cx
//! src_y = sin θ * (dst_x + 0.5 - cx) + cos θ * (dst_y + 0.5 - cy) + cy
//! ```
//!
//! Multiples of 180 degrees, and multiples of 90 degrees on square images,
//! are exact pixel permutations and skip the sampler entirely.

use serde::{Deserialize, Serialize};

use crate::Image;

/// Color used for pixels with no source.
pub const FILL_COLOR: [u8; 3] = [0, 0, 0];

/// Sampler used for arbitrary-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationFilter {
    /// Pick the source pixel containing the mapped point.
    #[default]
    Nearest,
    /// Weighted average of the 4 nearest source pixels.
    Bilinear,
}

/// Rotate an image about its centre without expanding the canvas.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
/// * `filter` - Sampler for angles that are not exact pixel permutations
pub fn apply_rotation(image: &Image, angle_degrees: f64, filter: InterpolationFilter) -> Image {
    if image.is_empty() {
        return image.clone();
    }

    let angle = angle_degrees.rem_euclid(360.0);
    let square = image.width == image.height;

    if angle == 0.0 {
        return image.clone();
    }
    if angle == 180.0 {
        return rotate_half_turn(image);
    }
    if square && angle == 90.0 {
        let n = image.width - 1;
        return permute(image, |x, y| (n - y, x));
    }
    if square && angle == 270.0 {
        let n = image.width - 1;
        return permute(image, |x, y| (y, n - x));
    }

    let angle_rad = angle.to_radians();
    let cos = round15(angle_rad.cos());
    let sin = round15(angle_rad.sin());

    let cx = image.width as f64 / 2.0;
    let cy = image.height as f64 / 2.0;

    let mut output = Vec::with_capacity(image.pixels.len());

    for dst_y in 0..image.height {
        let dy = dst_y as f64 + 0.5 - cy;
        for dst_x in 0..image.width {
            let dx = dst_x as f64 + 0.5 - cx;

            let src_x = cos * dx - sin * dy + cx;
            let src_y = sin * dx + cos * dy + cy;

            let pixel = match filter {
                InterpolationFilter::Nearest => sample_nearest(image, src_x, src_y),
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y),
            };
            output.extend_from_slice(&pixel.unwrap_or(FILL_COLOR));
        }
    }

    Image {
        width: image.width,
        height: image.height,
        pixels: output,
    }
}

/// Round to 15 decimal places so cos/sin of right angles become exact.
#[inline]
fn round15(v: f64) -> f64 {
    (v * 1e15).round() / 1e15
}

fn rotate_half_turn(image: &Image) -> Image {
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for px in image.pixels.chunks_exact(3).rev() {
        pixels.extend_from_slice(px);
    }
    Image {
        width: image.width,
        height: image.height,
        pixels,
    }
}

/// Build a same-sized image where `dst(x, y) = src(map(x, y))`.
fn permute(image: &Image, map: impl Fn(u32, u32) -> (u32, u32)) -> Image {
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for y in 0..image.height {
        for x in 0..image.width {
            let (sx, sy) = map(x, y);
            pixels.extend_from_slice(&image.pixel(sx, sy));
        }
    }
    Image {
        width: image.width,
        height: image.height,
        pixels,
    }
}

/// Sample the pixel whose cell contains `(x, y)`.
fn sample_nearest(image: &Image, x: f64, y: f64) -> Option<[u8; 3]> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (px, py) = (x as u32, y as u32);
    if px >= image.width || py >= image.height {
        return None;
    }
    Some(image.pixel(px, py))
}

/// Get a pixel as [f64; 3] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &Image, px: u32, py: u32) -> [f64; 3] {
    let p = image.pixel(px, py);
    [p[0] as f64, p[1] as f64, p[2] as f64]
}

/// Sample a pixel using bilinear interpolation.
///
/// `(x, y)` is in continuous coordinates where pixel `i` covers `[i, i+1)`.
/// Neighbours past the edge are clamped to the border pixel.
fn sample_bilinear(image: &Image, x: f64, y: f64) -> Option<[u8; 3]> {
    let (w, h) = (image.width as f64, image.height as f64);
    if x < 0.0 || x >= w || y < 0.0 || y >= h {
        return None;
    }

    // Shift to pixel-centre coordinates
    let xc = x - 0.5;
    let yc = y - 0.5;
    let fx0 = xc.floor();
    let fy0 = yc.floor();
    let fx = xc - fx0;
    let fy = yc - fy0;

    let max_x = image.width as i64 - 1;
    let max_y = image.height as i64 - 1;
    let x0 = (fx0 as i64).clamp(0, max_x) as u32;
    let y0 = (fy0 as i64).clamp(0, max_y) as u32;
    let x1 = (fx0 as i64 + 1).clamp(0, max_x) as u32;
    let y1 = (fy0 as i64 + 1).clamp(0, max_y) as u32;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    // Bilinear interpolation formula
    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    Some(result)
}
