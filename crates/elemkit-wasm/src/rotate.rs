//! Point rotation WASM bindings.
//!
//! Unlike the other bindings, `rotatePoints` writes the rotated coordinates
//! back into the caller's objects and returns the same reference, so code
//! that shares point objects sees the update. Copy the points first to keep
//! the originals.
//!
//! ```typescript
//! const corners = [{ x: 0, y: 0 }, null, { x: 10, y: 0 }];
//! rotatePoints(corners, { x: 5, y: 5 }, Math.PI / 2) === corners; // true
//! ```

use elemkit_core::geometry::Point;
use elemkit_core::rotate::{is_rotation_angle, Rotation};
use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn read_point(value: &JsValue) -> Result<Point, JsValue> {
    let coord = |name: &str| -> Result<f64, JsValue> {
        Ok(Reflect::get(value, &JsValue::from_str(name))?
            .as_f64()
            .unwrap_or(f64::NAN))
    };
    Ok(Point::new(coord("x")?, coord("y")?))
}

fn write_point(target: &JsValue, point: Point) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str("x"), &JsValue::from_f64(point.x))?;
    Reflect::set(target, &JsValue::from_str("y"), &JsValue::from_f64(point.y))?;
    Ok(())
}

fn rotate_in_place(target: &JsValue, rotation: &Rotation) -> Result<(), JsValue> {
    let mut point = read_point(target)?;
    rotation.apply(&mut point);
    write_point(target, point)
}

/// Rotate one point, or an array of points, about `center` by `rotation`
/// radians.
///
/// Falsy array entries are skipped. A falsy `points` or `rotation` returns
/// `points` untouched.
///
/// # Errors
///
/// Returns an error if `center` or a point is not an object.
#[wasm_bindgen(js_name = rotatePoints)]
pub fn rotate_points(points: JsValue, center: JsValue, rotation: f64) -> Result<JsValue, JsValue> {
    if points.is_falsy() || !is_rotation_angle(rotation) {
        return Ok(points);
    }
    let Some(rotation) = Rotation::new(read_point(&center)?, rotation) else {
        return Ok(points);
    };

    if Array::is_array(&points) {
        for entry in points.unchecked_ref::<Array>().iter() {
            if entry.is_falsy() {
                continue;
            }
            rotate_in_place(&entry, &rotation)?;
        }
    } else {
        rotate_in_place(&points, &rotation)?;
    }
    Ok(points)
}
