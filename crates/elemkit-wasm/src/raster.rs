//! WASM bindings for image rotation.
//!
//! `rotateImage` takes encoded image bytes (PNG or JPEG) rather than a URL:
//! fetching the image is left to the caller.
//!
//! ```typescript
//! const bytes = new Uint8Array(await (await fetch(url)).arrayBuffer());
//! img.src = rotateImage(bytes, Math.PI / 2);
//! ```

use crate::types::JsRaster;
use elemkit_core::raster;
use wasm_bindgen::prelude::*;

/// Rotate an encoded image about its center and return a PNG data URL.
///
/// # Arguments
///
/// * `bytes` - Encoded PNG or JPEG bytes
/// * `rotation` - Angle in radians, positive = clockwise
///
/// # Returns
///
/// `data:image/png;base64,...` with the same dimensions as the source, or an
/// empty string for empty input.
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded.
#[wasm_bindgen(js_name = rotateImage)]
pub fn rotate_image(bytes: &[u8], rotation: f64) -> Result<String, JsValue> {
    raster::rotate_image(bytes, rotation).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate raw RGBA pixels about their center on a same-size canvas.
#[wasm_bindgen(js_name = rotateRaster)]
pub fn rotate_raster(image: &JsRaster, rotation: f64) -> JsRaster {
    let src = image.to_raster();
    JsRaster::from_raster(raster::rotate_raster(&src, rotation))
}

/// Encode raw RGBA pixels as a PNG data URL.
#[wasm_bindgen(js_name = encodePngDataUrl)]
pub fn encode_png_data_url(image: &JsRaster) -> Result<String, JsValue> {
    raster::encode_png_data_url(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}
