//! Page-local identifiers.

use elemkit_core::units::format_number;
use wasm_bindgen::prelude::*;

/// Exclusive upper bound of the random part of [`uuid`].
const RANDOM_SPAN: f64 = 1e10;

/// Short numeric id: epoch milliseconds plus a random integer below 10^10.
///
/// Collisions are unlikely within one page but possible; this is not an
/// RFC 4122 UUID.
#[wasm_bindgen]
pub fn uuid() -> String {
    let time = js_sys::Date::now();
    let random = (js_sys::Math::random() * RANDOM_SPAN).floor();
    format_number(time + random)
}

/// WASM-specific tests that require `Date` and `Math`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_uuid_is_decimal_integer() {
        let id = uuid();
        assert!(!id.is_empty());
        assert!(id.bytes().all(|b| b.is_ascii_digit()), "{}", id);
    }

    #[wasm_bindgen_test]
    fn test_uuid_is_at_least_current_time() {
        let before = js_sys::Date::now();
        let id: f64 = uuid().parse().unwrap();
        assert!(id >= before);
        assert!(id < js_sys::Date::now() + RANDOM_SPAN);
    }

    #[wasm_bindgen_test]
    fn test_uuid_values_differ() {
        let ids: std::collections::HashSet<String> = (0..32).map(|_| uuid()).collect();
        assert!(ids.len() > 1);
    }
}
