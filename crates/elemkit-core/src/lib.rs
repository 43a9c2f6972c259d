//! elemkit Core - geometry and unit helpers for browser editors
//!
//! This crate provides the target-independent half of elemkit: unit-carrying
//! values (`px`, `deg`, `rad`), point rotation, page position of visual nodes,
//! CSS color strings, and image rotation by raster re-rendering.
//!
//! Apart from the raster codec, nothing here fails. Malformed input degrades
//! to a documented fallback (a pass-through value, `0`, or the origin).

mod log;

pub mod angle;
pub mod color;
pub mod geometry;
pub mod node;
pub mod raster;
pub mod rotate;
pub mod units;

pub use angle::{deg_to_rad, rad_to_deg, to_deg, to_rad};
pub use color::{color_to_string, to_multiple_int, Color};
pub use geometry::{Point, Rect};
pub use node::{
    element_bounding_rect, element_position, to_dom_position, LogicalPoint, PageScroll,
    RenderedNode, StaticScroll, VisualNode,
};
pub use raster::{rotate_image, rotate_raster, Raster, RasterError};
pub use rotate::{is_rotation_angle, rotate_point, rotate_points, Rotation};
pub use units::{
    is_deg_number, is_number, is_px_number, is_rad_number, to_number, to_px, UnitValue,
};
