//! elemkit WASM - WebAssembly bindings for elemkit
//!
//! This crate exposes the elemkit-core helpers to JavaScript/TypeScript under
//! their camelCase names, and implements the core's node and scroll traits for
//! real DOM elements via `web-sys`.
//!
//! # Module Structure
//!
//! - `units` - `isNumber`, `isPXNumber`, `toPX`, `toNumber`, ...
//! - `angle` - `radToDeg`, `degToRad`, `toDeg`, `toRad`
//! - `rotate` - `rotatePoints` (mutates the passed points)
//! - `color` - `colorToString`, `toMultipleInt`
//! - `dom` - element geometry plus `css` / `attr` / `setClass`
//! - `raster` - `rotateImage`, `rotateRaster`, `encodePngDataUrl`
//! - `id` - `uuid`
//! - `types` - WASM-compatible wrapper for RGBA pixel data
//!
//! # Usage
//!
//! ```typescript
//! import init, { toPX, rotatePoints, getElementBoundingRect } from '@elemkit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! el.style.width = toPX(120);
//! const bounds = getElementBoundingRect(el);
//! ```

use wasm_bindgen::prelude::*;

mod angle;
mod color;
mod dom;
mod id;
mod raster;
mod rotate;
mod types;
mod units;

// Re-export public types
pub use angle::{deg_to_rad, rad_to_deg, to_deg, to_rad};
pub use color::{color_to_string, to_multiple_int};
pub use dom::{attr, css, get_element_bounding_rect, get_element_position, set_class, to_dom_position};
pub use id::uuid;
pub use raster::{encode_png_data_url, rotate_image, rotate_raster};
pub use rotate::rotate_points;
pub use types::JsRaster;
pub use units::{is_deg_number, is_number, is_px_number, is_rad_number, to_number, to_px};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
