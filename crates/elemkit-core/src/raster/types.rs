//! Raster buffer and error types.

use thiserror::Error;

/// Bytes per RGBA8 pixel.
pub(crate) const CHANNELS: usize = 4;

/// Errors from decoding, validating or encoding a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The input bytes are not a supported image
    #[error("Image decoding failed: {0}")]
    DecodeFailed(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// An RGBA8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A fully transparent raster.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, vec![0; width as usize * height as usize * CHANNELS])
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Check dimensions and buffer length.
    pub fn validate(&self) -> Result<(), RasterError> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width as usize * self.height as usize * CHANNELS;
        if self.pixels.len() != expected {
            return Err(RasterError::InvalidPixelData {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// RGBA of the pixel at (`x`, `y`), or `None` outside the raster.
    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = self.pixels.get(idx..idx + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent() {
        let r = Raster::transparent(3, 2);
        assert_eq!(r.pixels.len(), 24);
        assert!(r.pixels.iter().all(|&b| b == 0));
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_validate_dimensions() {
        let r = Raster {
            width: 0,
            height: 10,
            pixels: vec![],
        };
        assert!(matches!(
            r.validate(),
            Err(RasterError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(r.is_empty());
    }

    #[test]
    fn test_validate_pixel_length() {
        let r = Raster {
            width: 2,
            height: 2,
            pixels: vec![0; 12],
        };
        assert!(matches!(
            r.validate(),
            Err(RasterError::InvalidPixelData {
                expected: 16,
                actual: 12
            })
        ));
    }

    #[test]
    fn test_pixel_lookup() {
        let r = Raster::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(r.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(r.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(r.pixel(2, 0), None);
        assert_eq!(r.pixel(-1, 0), None);
        assert_eq!(r.pixel(0, 1), None);
    }

    #[test]
    fn test_from_rgba_image() {
        let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([9, 8, 7, 6]));
        let r = Raster::from_rgba_image(img);
        assert_eq!((r.width, r.height), (4, 3));
        assert_eq!(r.pixel(3, 2), Some([9, 8, 7, 6]));
    }
}
