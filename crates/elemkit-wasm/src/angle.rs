//! Angle conversion WASM bindings.

use crate::units::convert_js;
use elemkit_core::angle;
use wasm_bindgen::prelude::*;

/// Radians to degrees: `Math.PI -> 180`.
#[wasm_bindgen(js_name = radToDeg)]
pub fn rad_to_deg(value: f64) -> f64 {
    angle::rad_to_deg(value)
}

/// Degrees to radians: `180 -> Math.PI`.
#[wasm_bindgen(js_name = degToRad)]
pub fn deg_to_rad(value: f64) -> f64 {
    angle::deg_to_rad(value)
}

/// `1 -> "1deg"`, `"3.14rad" -> "179.9...deg"`; other values unchanged.
#[wasm_bindgen(js_name = toDeg)]
pub fn to_deg(value: JsValue) -> JsValue {
    convert_js(value, angle::to_deg)
}

/// `1 -> "1rad"`, `"180deg" -> "3.14...rad"`; other values unchanged.
#[wasm_bindgen(js_name = toRad)]
pub fn to_rad(value: JsValue) -> JsValue {
    convert_js(value, angle::to_rad)
}
