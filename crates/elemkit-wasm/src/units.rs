//! Unit value WASM bindings.
//!
//! JavaScript callers pass plain numbers or strings. Anything else
//! (`undefined`, objects, booleans) is treated as an unrecognized value:
//! predicates return `false`, conversions pass it through unchanged and
//! `toNumber` returns `0`.
//!
//! ```typescript
//! toPX(2);            // "2px"
//! toNumber("12.5px"); // 12.5
//! isDegNumber("90deg"); // true
//! ```

use elemkit_core::units::{self, UnitValue};
use wasm_bindgen::prelude::*;

/// Read a JS number or string as a unit value.
pub(crate) fn unit_from_js(value: &JsValue) -> Option<UnitValue> {
    if let Some(n) = value.as_f64() {
        return Some(UnitValue::Number(n));
    }
    value.as_string().map(UnitValue::Text)
}

pub(crate) fn unit_to_js(value: UnitValue) -> JsValue {
    match value {
        UnitValue::Number(n) => JsValue::from_f64(n),
        UnitValue::Text(s) => JsValue::from_str(&s),
    }
}

/// Apply a unit conversion, passing unrecognized JS values through.
pub(crate) fn convert_js(value: JsValue, convert: fn(UnitValue) -> UnitValue) -> JsValue {
    match unit_from_js(&value) {
        Some(unit) => unit_to_js(convert(unit)),
        None => value,
    }
}

fn test_js(value: &JsValue, predicate: fn(&UnitValue) -> bool) -> bool {
    unit_from_js(value).is_some_and(|unit| predicate(&unit))
}

/// True for numbers and plain numeric strings.
#[wasm_bindgen(js_name = isNumber)]
pub fn is_number(value: JsValue) -> bool {
    test_js(&value, units::is_number)
}

/// True for pixel strings such as `"12px"`.
#[wasm_bindgen(js_name = isPXNumber)]
pub fn is_px_number(value: JsValue) -> bool {
    test_js(&value, units::is_px_number)
}

/// True for degree strings such as `"90deg"`.
#[wasm_bindgen(js_name = isDegNumber)]
pub fn is_deg_number(value: JsValue) -> bool {
    test_js(&value, units::is_deg_number)
}

/// True for radian strings such as `"3.14rad"`.
#[wasm_bindgen(js_name = isRadNumber)]
pub fn is_rad_number(value: JsValue) -> bool {
    test_js(&value, units::is_rad_number)
}

/// `2 -> "2px"`; other values are returned unchanged.
#[wasm_bindgen(js_name = toPX)]
pub fn to_px(value: JsValue) -> JsValue {
    convert_js(value, units::to_px)
}

/// `"2px" -> 2`, optionally rounded to `fraction_digits` decimals.
#[wasm_bindgen(js_name = toNumber)]
pub fn to_number(value: JsValue, fraction_digits: Option<u32>) -> f64 {
    match unit_from_js(&value) {
        Some(unit) => units::to_number(&unit, fraction_digits),
        None => 0.0,
    }
}
