//! Painting the ring, the triangle and the indicator layer.
//!
//! The triangle is built from three passes: a white fill, one horizontal
//! saturation gradient per pixel row (a single linear gradient cannot follow
//! the slanted edges), and a vertical black overlay that falls off from the
//! apex to the base.

use tiny_skia::{GradientStop, LinearGradient, Paint, Pixmap, Rect, SpreadMode, Transform};

use crate::constants;
use crate::error::PickerError;
use crate::mapping::{self, TrianglePoint};
use crate::math;
use crate::measure::{Measurements, Point};
use crate::raster;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Paint background, ring and triangle.
pub(crate) fn draw_all(
    surface: &mut Pixmap,
    m: &Measurements,
    hue: f64,
    background: [u8; 4],
) -> Result<(), PickerError> {
    surface.fill(raster::color(background));
    draw_ring(surface, m)?;
    draw_triangle(surface, m, hue, background);
    Ok(())
}

pub(crate) fn draw_ring(surface: &mut Pixmap, m: &Measurements) -> Result<(), PickerError> {
    let mid = m.ring_mid_radius();
    let half = m.ring_thickness / 2.0;
    raster::draw_hue_ring(surface, m.ring_center(), mid - half, mid + half)
}

fn gradient(start: Point, end: Point, stops: Vec<GradientStop>) -> Option<Paint<'static>> {
    let shader = LinearGradient::new(
        raster::to_sk(start),
        raster::to_sk(end),
        stops,
        SpreadMode::Pad,
        Transform::identity(),
    )?;
    Some(Paint {
        shader,
        ..Paint::default()
    })
}

/// Repaint the triangle for `hue`, leaving the ring untouched.
pub(crate) fn draw_triangle(surface: &mut Pixmap, m: &Measurements, hue: f64, background: [u8; 4]) {
    let (r, g, b) = math::hsl_to_rgb(hue, 1.0, 0.5);
    let (r, g, b) = (
        math::channel_to_u8(r),
        math::channel_to_u8(g),
        math::channel_to_u8(b),
    );
    let opaque = raster::color([r, g, b, 255]);
    let clear = raster::color([r, g, b, 0]);
    let c = m.center();

    if let Some(disc) = raster::circle(c, m.triangle_radius) {
        raster::fill(surface, &disc, &raster::solid(background));
    }
    let Some(triangle) = raster::polygon(&[m.apex(), m.base_left(), m.base_right()]) else {
        log::warn!("Triangle is degenerate at {}x{}", m.w, m.h);
        return;
    };
    raster::fill(surface, &triangle, &raster::solid(WHITE));

    for i in 0..m.row_count() {
        let row = m.saturation_row(i);
        // near the apex the gradient endpoints cross over, so flip the stops
        // to keep the pure hue on the right
        let stops = if row.half_width < m.margin {
            vec![GradientStop::new(0.0, clear), GradientStop::new(1.0, opaque)]
        } else {
            vec![GradientStop::new(0.0, opaque), GradientStop::new(1.0, clear)]
        };
        let Some(paint) = gradient(
            Point::new(row.start_x, row.y),
            Point::new(row.end_x, row.y),
            stops,
        ) else {
            continue;
        };
        let rect = Rect::from_xywh(
            (c.x - row.half_width) as f32,
            row.y.round() as f32,
            (2.0 * row.half_width) as f32,
            1.0,
        );
        if let Some(rect) = rect {
            surface.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    let (top, bottom) = m.value_span();
    let lightness = gradient(
        Point::new(0.0, top),
        Point::new(0.0, bottom),
        vec![
            GradientStop::new(0.0, raster::color(BLACK)),
            GradientStop::new(1.0, raster::color([0, 0, 0, 0])),
        ],
    );
    if let Some(paint) = lightness {
        raster::fill(surface, &triangle, &paint);
    }
}

/// Repaint the overlay: a tick across the ring at `hue` and a two-tone
/// marker at the triangle point.
pub(crate) fn draw_indicators(layer: &mut Pixmap, m: &Measurements, hue: f64, point: TrianglePoint) {
    layer.fill(tiny_skia::Color::TRANSPARENT);

    let c = m.center();
    let (sin, cos) = hue.to_radians().sin_cos();
    let inner = Point::new(c.x + cos * m.triangle_radius, c.y + sin * m.triangle_radius);
    let outer_r = m.triangle_radius + m.ring_thickness;
    let outer = Point::new(c.x + cos * outer_r, c.y + sin * outer_r);
    if let Some(tick) = raster::polyline(&[inner, outer]) {
        raster::stroke(layer, &tick, constants::INDICATOR_STROKE, BLACK);
    }

    let marker = mapping::point_to_pixel(point, m);
    for (radius, rgba) in [
        (constants::MARKER_INNER_RADIUS, WHITE),
        (constants::MARKER_OUTER_RADIUS, BLACK),
    ] {
        if let Some(ring) = raster::circle(marker, radius) {
            raster::stroke(layer, &ring, constants::INDICATOR_STROKE, rgba);
        }
    }
}
