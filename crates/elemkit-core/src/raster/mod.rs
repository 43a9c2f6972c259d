//! Image rotation by raster re-rendering.
//!
//! This module redraws an image rotated about its center onto a canvas of
//! the same size, the way a 2D canvas does with
//! `translate(c) / rotate(θ) / translate(-c) / drawImage`, and serializes the
//! result as a PNG data URL.
//!
//! # Coordinate System
//!
//! - Angles are in radians, positive = clockwise on screen (y points down)
//! - The canvas keeps the source dimensions; corners that rotate out of
//!   view are clipped, uncovered areas are transparent
//! - Pixels are RGBA8, row-major

mod codec;
mod rotate;
mod types;

pub use codec::{decode_raster, encode_png, encode_png_data_url, rotate_image, PNG_DATA_URL_PREFIX};
pub use rotate::rotate_raster;
pub use types::{Raster, RasterError};
