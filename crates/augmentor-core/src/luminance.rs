//! Luma (grayscale) conversion using ITU-R 601-2 coefficients.
//!
//! Gray values are computed in 16-bit fixed point with integer arithmetic,
//! the way common imaging libraries convert RGB to a single-channel "L"
//! image, so enhancement pivots land on the same integers.

/// Fixed-point weight of the red channel (0.299 * 65536).
pub const LUMA_R: u32 = 19595;

/// Fixed-point weight of the green channel (0.587 * 65536).
pub const LUMA_G: u32 = 38470;

/// Fixed-point weight of the blue channel (0.114 * 65536).
pub const LUMA_B: u32 = 7471;

/// Convert one RGB pixel to its 8-bit luma value.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + 0x8000) >> 16) as u8
}

/// Average luma of a packed RGB buffer, rounded half-up to an integer.
///
/// Returns 0 for an empty buffer.
pub fn mean_luma(pixels: &[u8]) -> u8 {
    let mut sum: u64 = 0;
    let mut count: u64 = 0;
    for px in pixels.chunks_exact(3) {
        sum += luma_u8(px[0], px[1], px[2]) as u64;
        count += 1;
    }
    if count == 0 {
        return 0;
    }
    let mean = sum as f64 / count as f64;
    (mean + 0.5) as u8
}
