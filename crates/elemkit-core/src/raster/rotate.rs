//! Same-canvas raster rotation with bilinear sampling.
//!
//! The rotation uses inverse mapping: for each pixel center of the output
//! canvas we rotate back by `-θ` about the canvas center to find where it
//! came from in the source, then sample the source there.
//!
//! Sampling is done on premultiplied alpha so transparent neighbors (and the
//! transparent area outside the source) do not bleed their color into edges.

use super::types::{Raster, CHANNELS};
use crate::geometry::Point;
use crate::rotate::Rotation;

/// Rotate `image` about its center by `radians` on a same-size canvas.
///
/// Positive angles turn clockwise on screen. A zero or NaN angle returns an
/// unchanged copy.
pub fn rotate_raster(image: &Raster, radians: f64) -> Raster {
    let center = Point::new(image.width as f64 / 2.0, image.height as f64 / 2.0);

    // Fast path: nothing to rotate
    let Some(inverse) = Rotation::new(center, -radians) else {
        return image.clone();
    };

    let mut output = Raster::transparent(image.width, image.height);
    let width = image.width as usize;

    for dst_y in 0..image.height as usize {
        for dst_x in 0..width {
            let src = inverse.rotated(Point::new(dst_x as f64 + 0.5, dst_y as f64 + 0.5));
            let pixel = sample_bilinear(image, src.x - 0.5, src.y - 0.5);

            let idx = (dst_y * width + dst_x) * CHANNELS;
            output.pixels[idx..idx + CHANNELS].copy_from_slice(&pixel);
        }
    }

    output
}

/// Sample at pixel-index coordinates (`x`, `y`).
///
/// Neighbors outside the raster count as transparent black.
fn sample_bilinear(image: &Raster, x: f64, y: f64) -> [u8; 4] {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1, y0, fx * (1.0 - fy)),
        (x0, y0 + 1, (1.0 - fx) * fy),
        (x0 + 1, y0 + 1, fx * fy),
    ];

    // Premultiplied accumulation: [r*a, g*a, b*a, a]
    let mut sum = [0.0f64; 4];
    for (px, py, weight) in taps {
        if weight <= 0.0 {
            continue;
        }
        if let Some([r, g, b, a]) = image.pixel(px, py) {
            let a = a as f64 * weight;
            sum[0] += r as f64 * a;
            sum[1] += g as f64 * a;
            sum[2] += b as f64 * a;
            sum[3] += a;
        }
    }

    let alpha = sum[3];
    if alpha <= f64::EPSILON {
        return [0, 0, 0, 0];
    }

    let unpremultiply = |c: f64| (c / alpha).clamp(0.0, 255.0).round() as u8;
    [
        unpremultiply(sum[0]),
        unpremultiply(sum[1]),
        unpremultiply(sum[2]),
        alpha.clamp(0.0, 255.0).round() as u8,
    ]
}
