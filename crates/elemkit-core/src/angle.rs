//! Radian/degree conversion, numeric and string-level.
//!
//! String conversion always goes through the numeric branch, so a
//! converted value is guaranteed to carry the target suffix:
//! `"3.14159rad" -> 180 -> "180deg"` (modulo rounding).

use std::f64::consts::PI;

use crate::log::debug;
use crate::units::{is_deg_number, is_number, is_rad_number, parse_leading_float, UnitValue};

/// Radians to degrees: `PI -> 180`.
#[inline]
pub fn rad_to_deg(v: f64) -> f64 {
    v * (180.0 / PI)
}

/// Degrees to radians: `180 -> PI`.
#[inline]
pub fn deg_to_rad(v: f64) -> f64 {
    v * (PI / 180.0)
}

/// Format as degrees: `1 -> "1deg"`, `"3.14rad" -> "180deg"`.
///
/// Values already in degrees, and values that are neither numbers nor
/// radian strings, are returned unchanged. A radian string with no
/// parsable number (`"..rad"`) becomes `"NaNdeg"`.
pub fn to_deg(value: UnitValue) -> UnitValue {
    convert(value, "deg", is_rad_number, rad_to_deg)
}

/// Format as radians: `1 -> "1rad"`, `"180deg" -> "3.14...rad"`.
///
/// Values already in radians, and values that are neither numbers nor
/// degree strings, are returned unchanged. A degree string with no
/// parsable number becomes `"NaNrad"`.
pub fn to_rad(value: UnitValue) -> UnitValue {
    convert(value, "rad", is_deg_number, deg_to_rad)
}

fn convert(
    value: UnitValue,
    suffix: &str,
    is_source_unit: fn(&UnitValue) -> bool,
    to_target: fn(f64) -> f64,
) -> UnitValue {
    if is_number(&value) {
        return value.with_suffix(suffix);
    }

    if is_source_unit(&value) {
        // The grammar admits runs of dots ("..rad") that carry no number
        let n = value
            .as_text()
            .and_then(parse_leading_float)
            .unwrap_or(f64::NAN);
        return convert(UnitValue::Number(to_target(n)), suffix, is_source_unit, to_target);
    }

    debug!(?value, suffix, "angle conversion: passing value through");
    value
}
