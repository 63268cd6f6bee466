//! Pixmap helpers the renderer paints with and the picker samples from.
//!
//! Paths, gradients and compositing are tiny-skia's. The hue sweep has no
//! tiny-skia shader, so the ring is shaded per pixel into its own pixmap
//! and drawn over the surface.

use tiny_skia::{
    Color, ColorU8, FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use crate::error::PickerError;
use crate::math;
use crate::measure::Point;

/// A transparent pixmap, or an error if the size cannot be allocated.
pub(crate) fn surface(width: u32, height: u32) -> Result<Pixmap, PickerError> {
    Pixmap::new(width, height).ok_or_else(|| {
        log::error!("Failed to create pixmap {}x{}", width, height);
        PickerError::Surface { width, height }
    })
}

pub(crate) fn to_sk(p: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x as f32, p.y as f32)
}

pub(crate) fn color(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

pub(crate) fn solid(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color(rgba));
    paint
}

fn trace(points: &[Point], closed: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

/// Closed polygon through `points`.
pub(crate) fn polygon(points: &[Point]) -> Option<Path> {
    trace(points, true)
}

pub(crate) fn polyline(points: &[Point]) -> Option<Path> {
    trace(points, false)
}

pub(crate) fn circle(center: Point, radius: f64) -> Option<Path> {
    PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
}

pub(crate) fn fill(pixmap: &mut Pixmap, path: &Path, paint: &Paint) {
    pixmap.fill_path(path, paint, FillRule::Winding, Transform::identity(), None);
}

pub(crate) fn stroke(pixmap: &mut Pixmap, path: &Path, width: f64, rgba: [u8; 4]) {
    let stroke = Stroke {
        width: width as f32,
        ..Stroke::default()
    };
    pixmap.stroke_path(path, &solid(rgba), &stroke, Transform::identity(), None);
}

/// Paint a fully saturated hue sweep between two radii around `center`,
/// 0° pointing right and angles growing clockwise on screen. Both edges get
/// one pixel of coverage falloff.
pub(crate) fn draw_hue_ring(
    pixmap: &mut Pixmap,
    center: Point,
    inner: f64,
    outer: f64,
) -> Result<(), PickerError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut ring = surface(width, height)?;
    let stride = width as usize;

    for (i, px) in ring.pixels_mut().iter_mut().enumerate() {
        let dx = (i % stride) as f64 + 0.5 - center.x;
        let dy = (i / stride) as f64 + 0.5 - center.y;
        let d = dx.hypot(dy);
        let coverage = (d - inner + 0.5).clamp(0.0, 1.0) * (outer - d + 0.5).clamp(0.0, 1.0);
        if coverage <= 0.0 {
            continue;
        }
        let hue = math::normalize_hue(dy.atan2(dx).to_degrees());
        let (r, g, b) = math::hsl_to_rgb(hue, 1.0, 0.5);
        *px = ColorU8::from_rgba(
            math::channel_to_u8(r),
            math::channel_to_u8(g),
            math::channel_to_u8(b),
            math::channel_to_u8(coverage),
        )
        .premultiply();
    }

    pixmap.draw_pixmap(
        0,
        0,
        ring.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    Ok(())
}

/// Straight-alpha RGBA8 at `(x, y)`.
pub(crate) fn read_pixel(pixmap: &Pixmap, x: i64, y: i64) -> Result<[u8; 4], PickerError> {
    let out_of_bounds = PickerError::OutOfBounds {
        x,
        y,
        width: pixmap.width(),
        height: pixmap.height(),
    };
    if x < 0 || y < 0 {
        return Err(out_of_bounds);
    }
    let c = pixmap
        .pixel(x as u32, y as u32)
        .ok_or(out_of_bounds)?
        .demultiply();
    Ok([c.red(), c.green(), c.blue(), c.alpha()])
}

/// The whole pixmap as straight-alpha RGBA8 rows.
pub(crate) fn straight_rgba8(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn empty_surfaces_are_errors() {
        assert_eq!(
            surface(0, 4).err(),
            Some(PickerError::Surface {
                width: 0,
                height: 4
            })
        );
        assert!(surface(3, 2).is_ok());
    }

    #[test]
    fn out_of_range_reads_are_errors() {
        let mut pixmap = surface(3, 2).unwrap();
        pixmap.fill(color(RED));
        assert!(read_pixel(&pixmap, -1, 0).is_err());
        assert!(matches!(
            read_pixel(&pixmap, 0, 2),
            Err(PickerError::OutOfBounds { x: 0, y: 2, .. })
        ));
        assert_eq!(read_pixel(&pixmap, 2, 1), Ok(RED));
    }

    #[test]
    fn readback_is_demultiplied() {
        let mut pixmap = surface(2, 1).unwrap();
        pixmap.fill(color([0, 200, 0, 128]));
        let [r, g, b, a] = read_pixel(&pixmap, 1, 0).unwrap();
        assert_eq!((r, b, a), (0, 0, 128));
        assert!((198..=202).contains(&g), "{g}");
        assert_eq!(straight_rgba8(&pixmap).len(), 8);
        assert_eq!(straight_rgba8(&pixmap)[3], 128);
    }

    #[test]
    fn polygon_fill_respects_edges() {
        let mut pixmap = surface(10, 10).unwrap();
        let tri = polygon(&[Point::new(5.0, 0.0), Point::new(0.0, 10.0), Point::new(10.0, 10.0)])
            .unwrap();
        fill(&mut pixmap, &tri, &solid(RED));
        assert_eq!(read_pixel(&pixmap, 4, 8), Ok(RED));
        assert_eq!(read_pixel(&pixmap, 0, 1).map(|p| p[3]), Ok(0));
        assert_eq!(read_pixel(&pixmap, 9, 1).map(|p| p[3]), Ok(0));
        assert!(polygon(&[]).is_none());
    }

    #[test]
    fn hue_ring_starts_red_on_the_right() {
        let mut pixmap = surface(21, 21).unwrap();
        pixmap.fill(Color::BLACK);
        draw_hue_ring(&mut pixmap, Point::new(10.5, 10.5), 6.0, 10.0).unwrap();
        let [r, g, b, _] = read_pixel(&pixmap, 18, 10).unwrap();
        assert!(r > 240 && g < 20 && b < 20);
        // below the centre is 90°, between yellow and green
        let [r, g, _, _] = read_pixel(&pixmap, 10, 18).unwrap();
        assert!(g > 240 && r > 100);
        assert_eq!(read_pixel(&pixmap, 10, 10), Ok([0, 0, 0, 255]));
    }
}
