//! Decoding source images and encoding PNG data URLs.
//!
//! Decoding uses the `image` crate's format sniffing (PNG and JPEG are
//! compiled in); encoding always produces PNG, matching what a canvas
//! `toDataURL()` returns by default.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::rotate::rotate_raster;
use super::types::{Raster, RasterError};
use crate::log::{debug, warn};

/// Prefix of every data URL produced by [`encode_png_data_url`].
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Decode image bytes (PNG or JPEG) into an RGBA raster.
pub fn decode_raster(bytes: &[u8]) -> Result<Raster, RasterError> {
    let img = image::load_from_memory(bytes).map_err(|e| {
        warn!(error = %e, len = bytes.len(), "decode_raster: unsupported image");
        RasterError::DecodeFailed(e.to_string())
    })?;
    Ok(Raster::from_rgba_image(img.to_rgba8()))
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, RasterError> {
    raster.validate()?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &raster.pixels,
            raster.width,
            raster.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| RasterError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a raster as a `data:image/png;base64,...` URL.
pub fn encode_png_data_url(raster: &Raster) -> Result<String, RasterError> {
    let png = encode_png(raster)?;
    Ok(format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(png)))
}

/// Decode `bytes`, rotate about the center by `radians` and return a PNG
/// data URL.
///
/// Empty input yields an empty string rather than an error.
pub fn rotate_image(bytes: &[u8], radians: f64) -> Result<String, RasterError> {
    if bytes.is_empty() {
        debug!("rotate_image: empty input");
        return Ok(String::new());
    }

    let source = decode_raster(bytes)?;
    debug!(
        width = source.width,
        height = source.height,
        radians,
        "rotate_image: decoded source"
    );
    encode_png_data_url(&rotate_raster(&source, radians))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn checker(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Raster::new(width, height, pixels)
    }

    fn decode_data_url(url: &str) -> Raster {
        let payload = url
            .strip_prefix(PNG_DATA_URL_PREFIX)
            .expect("data URL prefix");
        let bytes = STANDARD.decode(payload).expect("valid base64");
        decode_raster(&bytes).expect("decodable PNG")
    }

    #[test]
    fn test_encode_png_magic() {
        let png = encode_png(&checker(8, 4)).expect("encodes");
        assert_eq!(&png[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_encode_rejects_invalid_raster() {
        let bad = Raster {
            width: 4,
            height: 4,
            pixels: vec![0; 10],
        };
        assert!(matches!(
            encode_png(&bad),
            Err(RasterError::InvalidPixelData { .. })
        ));

        let empty = Raster {
            width: 0,
            height: 4,
            pixels: vec![],
        };
        assert!(matches!(
            encode_png_data_url(&empty),
            Err(RasterError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_data_url_round_trip() {
        let img = checker(5, 3);
        let url = encode_png_data_url(&img).expect("encodes");
        assert!(url.starts_with(PNG_DATA_URL_PREFIX));
        assert_eq!(decode_data_url(&url), img);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_raster(b"definitely not an image");
        assert!(matches!(result, Err(RasterError::DecodeFailed(_))));
    }

    #[test]
    fn test_rotate_image_empty_input() {
        assert_eq!(rotate_image(&[], 1.0).expect("empty is ok"), "");
    }

    #[test]
    fn test_rotate_image_keeps_dimensions() {
        let png = encode_png(&checker(12, 7)).expect("encodes");
        let url = rotate_image(&png, 0.5).expect("rotates");
        let rotated = decode_data_url(&url);
        assert_eq!((rotated.width, rotated.height), (12, 7));
    }

    #[test]
    fn test_rotate_image_zero_angle_is_lossless() {
        let img = checker(6, 6);
        let png = encode_png(&img).expect("encodes");
        let url = rotate_image(&png, 0.0).expect("rotates");
        assert_eq!(decode_data_url(&url), img);
    }

    #[test]
    fn test_rotate_image_reads_jpeg() {
        let rgb = vec![200u8; 16 * 16 * 3];
        let mut jpeg = Cursor::new(Vec::new());
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 90)
            .write_image(&rgb, 16, 16, ExtendedColorType::Rgb8)
            .expect("encodes jpeg");

        let url = rotate_image(&jpeg.into_inner(), std::f64::consts::PI).expect("rotates");
        let rotated = decode_data_url(&url);
        assert_eq!((rotated.width, rotated.height), (16, 16));
    }
}
