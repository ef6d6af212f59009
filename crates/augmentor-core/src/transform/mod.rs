//! Geometric transforms: resize, rotation and random cropping.
//!
//! # Transform Order
//!
//! Within one augmentation pass geometry is applied in this order:
//! 1. Resize
//! 2. Rotation
//! 3. (color enhancement, see [`crate::enhance`])
//! 4. Random crop
//!
//! Resizing before rotating keeps the rotated pixel count proportional to
//! the scaled image rather than the source.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Crop boxes are integer pixel rectangles
//! - Origin is top-left corner

mod crop;
mod resize;
mod rotation;

pub use crop::{extract_region, random_crop, sample_crop_box, CropBox, CropMode};
pub use resize::{resize, resize_by_factor, scaled_dimensions, ResizeFilter};
pub use rotation::{apply_rotation, InterpolationFilter, FILL_COLOR};
