//! Unit-carrying values: plain numbers and `px` / `deg` / `rad` strings.
//!
//! Parsing here is deliberately permissive. Classification is total, and
//! conversions fall back to passing the value through (or to `0` for
//! [`to_number`]) instead of returning an error.
//!
//! # Grammars
//!
//! ```text
//! plain   ^\s*\d+(\.\d+)?\s*$
//! pixel   ^\s*[\d.]+\s*px\s*$     (case-insensitive)
//! degree  ^\s*[\d.]+\s*deg\s*$    (case-insensitive)
//! radian  ^\s*[\d.]+\s*rad\s*$    (case-insensitive)
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::log::debug;

// ASCII digits only: `\d` in `regex` is Unicode-aware by default.
static PLAIN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+(\.[0-9]+)?\s*$").expect("valid plain number regex"));
static PX_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[0-9.]+\s*px\s*$").expect("valid px regex"));
static DEG_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[0-9.]+\s*deg\s*$").expect("valid deg regex"));
static RAD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[0-9.]+\s*rad\s*$").expect("valid rad regex"));
static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))")
        .expect("valid leading float regex")
});

/// Largest precision accepted by [`to_number`]'s rounding step.
const MAX_FRACTION_DIGITS: u32 = 100;

/// Enough fraction digits to print any `f64` exactly (2^-1074 has 1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// A number, or a string that may carry a unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitValue {
    Number(f64),
    Text(String),
}

impl UnitValue {
    /// The text form, if this is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            UnitValue::Number(_) => None,
            UnitValue::Text(s) => Some(s),
        }
    }

    /// Append a unit suffix the way string concatenation would.
    pub(crate) fn with_suffix(&self, suffix: &str) -> UnitValue {
        UnitValue::Text(format!("{}{}", self, suffix))
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitValue::Number(n) => f.write_str(&format_number(*n)),
            UnitValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for UnitValue {
    fn from(value: f64) -> Self {
        UnitValue::Number(value)
    }
}

impl From<i32> for UnitValue {
    fn from(value: i32) -> Self {
        UnitValue::Number(value as f64)
    }
}

impl From<&str> for UnitValue {
    fn from(value: &str) -> Self {
        UnitValue::Text(value.to_string())
    }
}

impl From<String> for UnitValue {
    fn from(value: String) -> Self {
        UnitValue::Text(value)
    }
}

/// True for numbers and for strings holding only a plain decimal number.
pub fn is_number(value: &UnitValue) -> bool {
    match value {
        UnitValue::Number(_) => true,
        UnitValue::Text(s) => PLAIN_NUMBER.is_match(s),
    }
}

/// True for strings like `"12px"` or `" 1.5 PX "`.
pub fn is_px_number(value: &UnitValue) -> bool {
    value.as_text().is_some_and(|s| PX_NUMBER.is_match(s))
}

/// True for strings like `"90deg"`.
pub fn is_deg_number(value: &UnitValue) -> bool {
    value.as_text().is_some_and(|s| DEG_NUMBER.is_match(s))
}

/// True for strings like `"3.14rad"`.
pub fn is_rad_number(value: &UnitValue) -> bool {
    value.as_text().is_some_and(|s| RAD_NUMBER.is_match(s))
}

/// Convert a plain number to a pixel string: `2 -> "2px"`.
///
/// Anything that is not a plain number (already suffixed, or unrecognized)
/// is returned unchanged.
pub fn to_px(value: UnitValue) -> UnitValue {
    if is_number(&value) {
        value.with_suffix("px")
    } else {
        debug!(?value, "to_px: passing through non-numeric value");
        value
    }
}

/// Coerce a value to a number: `"2px" -> 2`.
///
/// Plain numbers are converted directly. Other strings are parsed by leading
/// float extraction and fall back to `0` when nothing parses. When
/// `fraction_digits` is given the result is rounded to that many decimals.
pub fn to_number(value: &UnitValue, fraction_digits: Option<u32>) -> f64 {
    let n = match value {
        UnitValue::Number(n) => *n,
        UnitValue::Text(s) if PLAIN_NUMBER.is_match(s) => s.trim().parse().unwrap_or(0.0),
        UnitValue::Text(s) => match parse_leading_float(s) {
            Some(n) if !n.is_nan() && n != 0.0 => n,
            _ => {
                debug!(text = %s, "to_number: no leading number, using 0");
                0.0
            }
        },
    };

    match fraction_digits {
        Some(digits) => round_to(n, digits),
        None => n,
    }
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
///
/// Returns `None` when no prefix parses. Accepts an optional sign, a
/// decimal fraction, an exponent, and `Infinity`.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let captures = LEADING_FLOAT.captures(s)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Stringify a number the way JavaScript does.
///
/// Integral values print without a fraction (`2`, not `2.0`), non-finite
/// values print as `NaN` / `Infinity`, and very large or very small
/// magnitudes switch to exponent notation.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

/// Round to `digits` decimals the way `Number#toFixed` does.
///
/// Rounding works on the exact decimal expansion of `n`, so `1.45` (stored
/// as `1.4499999...`) rounds down. Exact ties round away from zero.
fn round_to(n: f64, digits: u32) -> f64 {
    if !n.is_finite() || n.abs() >= 1e21 {
        return n;
    }
    let digits = digits.min(MAX_FRACTION_DIGITS) as usize;

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, n.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((&exact, ""));
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().take(digits))
        .collect();
    let mut int_len = int_part.len();

    if frac.as_bytes().get(digits).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut text: String = kept.iter().map(|&d| d as char).collect();
    if digits > 0 {
        text.insert(int_len, '.');
    }
    match text.parse::<f64>() {
        Ok(rounded) if n.is_sign_negative() => -rounded,
        Ok(rounded) => rounded,
        Err(_) => n,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every number is a plain number, its px form is not.
        #[test]
        fn prop_numbers_classify(n in 0u32..1_000_000, frac in 0u32..1000) {
            let n = n as f64 + frac as f64 / 1000.0;
            prop_assert!(is_number(&UnitValue::Number(n)));
            let px = to_px(UnitValue::Number(n));
            prop_assert!(!is_number(&px));
            prop_assert!(is_px_number(&px));
        }

        /// Property: to_number recovers the value behind to_px.
        #[test]
        fn prop_to_number_inverts_to_px(n in 0.0f64..1e9) {
            let px = to_px(UnitValue::Number(n));
            prop_assert_eq!(to_number(&px, None), n);
        }

        /// Property: to_number never produces NaN for text input.
        #[test]
        fn prop_to_number_text_is_never_nan(s in ".*") {
            prop_assert!(!to_number(&UnitValue::Text(s), None).is_nan());
        }
    }
}
