//! Rotation of points about a pivot.
//!
//! The origin is moved to the pivot, the standard rotation matrix is applied
//! and the origin is moved back:
//!
//! ```text
//! x' = (x - px) * cos(θ) - (y - py) * sin(θ) + px
//! y' = (x - px) * sin(θ) + (y - py) * cos(θ) + py
//! ```
//!
//! With the y axis pointing down, a positive angle turns clockwise on screen.
//!
//! Points are rotated in place and the same borrow is handed back, so a
//! caller that needs the original coordinates must copy them first.

use crate::geometry::{is_truthy, Point};
use crate::log::debug;

/// A rotation about a fixed pivot with its sine and cosine precomputed.
///
/// Every point transformed by one `Rotation` sees the same angle snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pivot: Point,
    cos: f64,
    sin: f64,
}

/// True when `angle` actually rotates: not `0` and not NaN.
#[inline]
pub fn is_rotation_angle(angle: f64) -> bool {
    is_truthy(angle)
}

impl Rotation {
    /// Build a rotation, or `None` when `angle` is `0` or NaN (nothing to do).
    pub fn new(pivot: Point, angle: f64) -> Option<Self> {
        if !is_rotation_angle(angle) {
            return None;
        }
        let (sin, cos) = angle.sin_cos();
        Some(Self { pivot, cos, sin })
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Rotate `point` in place.
    #[inline]
    pub fn apply(&self, point: &mut Point) {
        *point = self.rotated(*point);
    }

    /// Rotated copy of `point`.
    #[inline]
    pub fn rotated(&self, point: Point) -> Point {
        let dx = point.x - self.pivot.x;
        let dy = point.y - self.pivot.y;
        Point {
            x: dx * self.cos - dy * self.sin + self.pivot.x,
            y: dx * self.sin + dy * self.cos + self.pivot.y,
        }
    }
}

/// Rotate a single point about `pivot` by `angle` radians.
///
/// A zero or NaN angle leaves the point untouched.
pub fn rotate_point(point: &mut Point, pivot: Point, angle: f64) -> &mut Point {
    match Rotation::new(pivot, angle) {
        Some(rotation) => rotation.apply(point),
        None => {
            debug!(angle, "rotate_point: skipping zero angle");
        }
    }
    point
}

/// Rotate every point of a sequence about `pivot` by `angle` radians.
///
/// `None` entries are skipped and stay `None`. A zero or NaN angle leaves
/// the whole sequence untouched.
pub fn rotate_points(points: &mut [Option<Point>], pivot: Point, angle: f64) -> &mut [Option<Point>] {
    let Some(rotation) = Rotation::new(pivot, angle) else {
        debug!(angle, "rotate_points: skipping zero angle");
        return points;
    };

    for point in points.iter_mut().flatten() {
        rotation.apply(point);
    }
    points
}
