//! CSS color strings from RGB(A) components.

use serde::{Deserialize, Serialize};

use crate::units::format_number;

/// Multiplier for components that are already in the 0-255 range.
pub const DEFAULT_MULTIPLE: f64 = 1.0;

/// Multiplier for normalized (0.0 to 1.0) components.
pub const NORMALIZED_MULTIPLE: f64 = 255.0;

/// Color components, either 0-255 or normalized depending on the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    pub a: Option<f64>,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }
}

/// Scale by `multiple` and round up: `0.5 * 255 -> 128`.
#[inline]
pub fn to_multiple_int(v: f64, multiple: f64) -> f64 {
    (v * multiple).ceil()
}

/// Format as `rgb(r,g,b)`, or `rgba(r,g,b,a)` when alpha is present.
///
/// Every component, alpha included, is scaled by `multiple` and rounded up.
/// Pass [`NORMALIZED_MULTIPLE`] for 0-1 inputs; note that this scales alpha
/// too.
pub fn color_to_string(color: &Color, multiple: f64) -> String {
    let channel = |v: f64| format_number(to_multiple_int(v, multiple));
    let rgb = format!("{},{},{}", channel(color.r), channel(color.g), channel(color.b));

    match color.a {
        Some(a) => format!("rgba({},{})", rgb, channel(a)),
        None => format!("rgb({})", rgb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_without_alpha() {
        assert_eq!(
            color_to_string(&Color::rgb(10.0, 20.0, 30.0), DEFAULT_MULTIPLE),
            "rgb(10,20,30)"
        );
    }

    #[test]
    fn test_rgba_normalized() {
        assert_eq!(
            color_to_string(&Color::rgba(1.0, 0.0, 0.0, 1.0), NORMALIZED_MULTIPLE),
            "rgba(255,0,0,255)"
        );
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(to_multiple_int(0.5, 255.0), 128.0);
        assert_eq!(to_multiple_int(10.2, 1.0), 11.0);
        assert_eq!(
            color_to_string(&Color::rgba(0.1, 0.2, 0.3, 0.5), NORMALIZED_MULTIPLE),
            "rgba(26,51,77,128)"
        );
    }

    #[test]
    fn test_alpha_unscaled_with_default_multiple() {
        assert_eq!(
            color_to_string(&Color::rgba(1.0, 2.0, 3.0, 4.0), DEFAULT_MULTIPLE),
            "rgba(1,2,3,4)"
        );
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        // ceil(-0.2) is -0
        assert_eq!(
            color_to_string(&Color::rgb(-0.2, 0.0, 0.0), DEFAULT_MULTIPLE),
            "rgb(0,0,0)"
        );
    }
}
