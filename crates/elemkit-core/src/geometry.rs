//! Plain coordinate types shared by the rotation and node modules.
//!
//! All coordinates are CSS pixels with the origin at the top-left and the
//! y axis pointing down.

use serde::{Deserialize, Serialize};

/// A 2D point, also used for offsets and pivots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same size, origin moved by `delta`.
    pub fn translated(self, delta: Point) -> Rect {
        Rect {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }
}

/// JavaScript truthiness for numbers: zero and NaN are falsy.
#[inline]
pub(crate) fn is_truthy(v: f64) -> bool {
    v != 0.0 && !v.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from() {
        let p = Point::new(10.0, 5.0).offset_from(Point::new(3.0, 7.0));
        assert_eq!(p, Point::new(7.0, -2.0));
    }

    #[test]
    fn test_rect_translated_keeps_size() {
        let r = Rect::new(1.0, 2.0, 30.0, 40.0).translated(Point::new(10.0, 20.0));
        assert_eq!(r, Rect::new(11.0, 22.0, 30.0, 40.0));
        assert_eq!(r.origin(), Point::new(11.0, 22.0));
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(1.0));
        assert!(is_truthy(-0.5));
        assert!(!is_truthy(0.0));
        assert!(!is_truthy(-0.0));
        assert!(!is_truthy(f64::NAN));
    }
}
