//! Conversions between HSV, normalized triangle coordinates and pixels.
//!
//! `TrianglePoint` is independent of surface size: `x` runs across the full
//! side length, `y` runs from the apex (0) to the base (1). The triangle is
//! painted with black at the apex and a white→hue ramp along the base, so `y`
//! tracks HSV value and `x` grows with saturation.

use tiny_skia::Pixmap;

use crate::color::{Hsv, SolidColor};
use crate::error::PickerError;
use crate::measure::{Measurements, Point};
use crate::raster;

/// Normalized position inside the saturation/value triangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrianglePoint {
    pub x: f64,
    pub y: f64,
}

impl TrianglePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Surface pixel for a triangle point.
pub fn point_to_pixel(point: TrianglePoint, m: &Measurements) -> Point {
    Point::new(
        m.left_x + point.x * m.side_length,
        m.top_y + point.y * m.vertical_extent(),
    )
}

/// Triangle point for a surface pixel. Inverse of [`point_to_pixel`].
pub fn pixel_to_point(pixel: Point, m: &Measurements) -> TrianglePoint {
    TrianglePoint::new(
        (pixel.x - m.left_x) / m.side_length,
        (pixel.y - m.top_y) / m.vertical_extent(),
    )
}

/// Place an HSV color in the triangle without looking at the geometry.
///
/// Saturation is mapped linearly onto the middle half of the width and value
/// straight onto `y`. The painted gradients are inset from the edges, so the
/// colour rendered there only approximates `hsv`; see
/// [`hsv_to_rendered_point`] for a placement that reproduces it.
pub fn hsv_to_point(hsv: Hsv) -> TrianglePoint {
    TrianglePoint::new(hsv.s / 2.0 + 0.25, hsv.v)
}

/// Place an HSV color on the pixel whose painted colour is closest to it.
///
/// The row is picked from the black overlay's span, the column from that
/// row's saturation gradient. The result always lands on a whole pixel
/// inside the painted triangle.
pub fn hsv_to_rendered_point(hsv: Hsv, m: &Measurements) -> TrianglePoint {
    let s = hsv.s.clamp(0.0, 1.0);
    let v = hsv.v.clamp(0.0, 1.0);

    let (top, bottom) = m.value_span();
    let row = (top + v * (bottom - top) - 0.5).round();
    // saturation rows are painted at `i + row_offset`, rounded
    let last = m.row_count().saturating_sub(1) as f64;
    let i = (row - m.row_offset().round()).clamp(0.0, last) as usize;

    let column = (m.saturation_row(i).x_at_alpha(s) - 0.5).round();
    pixel_to_point(Point::new(column, row), m)
}

/// Analytic inverse of [`hsv_to_point`], for callers without a rendered buffer.
pub fn point_to_hsv(point: TrianglePoint, hue: f64) -> Hsv {
    Hsv::new(
        hue,
        ((point.x - 0.25) * 2.0).clamp(0.0, 1.0),
        point.y.clamp(0.0, 1.0),
    )
}

/// Read the rendered color under `pixel` (rounded to the nearest pixel).
pub fn sample_color(pixel: Point, surface: &Pixmap) -> Result<SolidColor, PickerError> {
    let x = pixel.x.round() as i64;
    let y = pixel.y.round() as i64;
    raster::read_pixel(surface, x, y).map(SolidColor::from_rgba8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_round_trip_recovers_point() {
        let m = Measurements::for_surface(320, 240, 3.0);
        for &(x, y) in &[(0.5, 0.05), (0.0, 1.0), (1.0, 1.0), (0.3, 0.7), (0.5, 0.0)] {
            let p = TrianglePoint::new(x, y);
            let back = pixel_to_point(point_to_pixel(p, &m), &m);
            assert!((back.x - x).abs() < 1e-9 && (back.y - y).abs() < 1e-9);
        }
    }

    #[test]
    fn corners_map_to_vertices() {
        let m = Measurements::for_surface(128, 128, 3.0);
        let apex = point_to_pixel(TrianglePoint::new(0.5, 0.0), &m);
        assert!((apex.x - m.apex().x).abs() < 1e-9 && (apex.y - m.apex().y).abs() < 1e-9);
        let right = point_to_pixel(TrianglePoint::new(1.0, 1.0), &m);
        assert!((right.x - m.right_x).abs() < 1e-9 && (right.y - m.bottom_y).abs() < 1e-9);
    }

    #[test]
    fn hsv_placement() {
        let p = hsv_to_point(Hsv::new(200.0, 1.0, 1.0));
        assert_eq!(p, TrianglePoint::new(0.75, 1.0));
        let p = hsv_to_point(Hsv::new(0.0, 0.0, 0.5));
        assert_eq!(p, TrianglePoint::new(0.25, 0.5));
        let back = point_to_hsv(TrianglePoint::new(0.6, 0.4), 42.0);
        assert!((back.s - 0.7).abs() < 1e-12 && (back.v - 0.4).abs() < 1e-12);
        assert_eq!(back.h, 42.0);
    }

    #[test]
    fn rendered_placement_lands_on_whole_pixels_inside() {
        let m = Measurements::for_surface(128, 128, 3.0);
        for &(s, v) in &[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5), (1.0, 0.1)] {
            let p = hsv_to_rendered_point(Hsv::new(30.0, s, v), &m);
            let px = point_to_pixel(p, &m);
            assert!((px.x - px.x.round()).abs() < 1e-9, "{px:?}");
            assert!((px.y - px.y.round()).abs() < 1e-9, "{px:?}");
            assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y), "{p:?}");
        }
        // full value stays clear of the base
        let low = point_to_pixel(hsv_to_rendered_point(Hsv::new(0.0, 0.0, 1.0), &m), &m);
        assert!(low.y < m.bottom_y - m.margin);
        // more saturation moves right
        let pale = hsv_to_rendered_point(Hsv::new(0.0, 0.2, 0.8), &m);
        let vivid = hsv_to_rendered_point(Hsv::new(0.0, 0.9, 0.8), &m);
        assert!(vivid.x > pale.x && vivid.y == pale.y);
    }

    #[test]
    fn sampling_outside_the_buffer_fails() {
        let mut surface = raster::surface(4, 4).unwrap();
        surface.fill(raster::color([1, 2, 3, 255]));
        assert_eq!(
            sample_color(Point::new(1.2, 2.6), &surface),
            Ok(SolidColor::from_rgba8([1, 2, 3, 255]))
        );
        assert!(matches!(
            sample_color(Point::new(3.6, 0.0), &surface),
            Err(PickerError::OutOfBounds { x: 4, .. })
        ));
    }
}
