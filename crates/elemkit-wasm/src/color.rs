//! Color formatting WASM bindings.

use elemkit_core::color::{self, Color, DEFAULT_MULTIPLE};
use wasm_bindgen::prelude::*;

/// Scale by `multiple` (default 1) and round up.
#[wasm_bindgen(js_name = toMultipleInt)]
pub fn to_multiple_int(value: f64, multiple: Option<f64>) -> f64 {
    color::to_multiple_int(value, multiple.unwrap_or(DEFAULT_MULTIPLE))
}

/// Format `{r, g, b, a?}` as `rgb(...)` / `rgba(...)`.
///
/// # Arguments
///
/// * `color` - Object with numeric `r`, `g`, `b` and optional `a`
/// * `multiple` - Scale applied to every component (default 1, use 255 for
///   normalized colors)
///
/// # Errors
///
/// Returns an error if `color` is not an object with numeric channels.
///
/// # Example (TypeScript)
///
/// ```typescript
/// colorToString({ r: 1, g: 0, b: 0, a: 1 }, 255); // "rgba(255,0,0,255)"
/// colorToString({ r: 10, g: 20, b: 30 });         // "rgb(10,20,30)"
/// ```
#[wasm_bindgen(js_name = colorToString)]
pub fn color_to_string(color: JsValue, multiple: Option<f64>) -> Result<String, JsValue> {
    let color: Color = serde_wasm_bindgen::from_value(color)
        .map_err(|e| JsValue::from_str(&format!("Invalid color: {}", e)))?;
    Ok(color::color_to_string(
        &color,
        multiple.unwrap_or(DEFAULT_MULTIPLE),
    ))
}
