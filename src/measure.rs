//! Geometry of the hue ring and the triangle it encloses.
//!
//! Everything is derived from the surface size on demand. Nothing here is
//! cached, so a resize can never leave stale geometry behind.

pub use kurbo::Point;

use crate::constants;

/// One horizontal saturation row of the triangle fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationRow {
    /// Unrounded row position; the row is painted at `y.round()`.
    pub y: f64,
    pub half_width: f64,
    /// Where the hue is fully opaque.
    pub start_x: f64,
    /// Where the hue has faded out.
    pub end_x: f64,
}

impl SaturationRow {
    /// Horizontal position where the hue shows with opacity `alpha`.
    ///
    /// Rows narrower than twice the margin run the fade right to left, but
    /// the opaque end is always the right one.
    pub fn x_at_alpha(&self, alpha: f64) -> f64 {
        let (clear, opaque) = if self.start_x < self.end_x {
            (self.start_x, self.end_x)
        } else {
            (self.end_x, self.start_x)
        };
        clear + alpha * (opaque - clear)
    }
}

/// Derived layout for one surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub w: f64,
    pub h: f64,
    /// Smaller and larger surface dimension.
    pub min: f64,
    pub max: f64,
    /// Offsets that centre the square picker area on a non-square surface.
    pub mx: f64,
    pub my: f64,
    pub ring_thickness: f64,
    pub margin: f64,
    /// Distance from the surface centre to each triangle vertex.
    pub triangle_radius: f64,
    pub side_length: f64,
    pub left_x: f64,
    pub right_x: f64,
    pub top_y: f64,
    pub bottom_y: f64,
}

impl Measurements {
    /// Measurements with the default ring thickness (`min / 12`).
    pub fn for_surface(width: u32, height: u32, margin: f64) -> Self {
        let ring = width.min(height) as f64 / constants::RING_DIVISOR;
        Self::new(width as f64, height as f64, ring, margin)
    }

    pub fn new(w: f64, h: f64, ring_thickness: f64, margin: f64) -> Self {
        let min = w.min(h);
        let max = w.max(h);
        let mx = if h < w { ((max - min) / 2.0).floor() } else { 0.0 };
        let my = if w < h { ((max - min) / 2.0).floor() } else { 0.0 };

        let triangle_radius = (min / 2.0).floor() - ring_thickness;
        // sqrt(3)/2 * radius is half a side
        let side_length = 3f64.sqrt() * triangle_radius;

        Self {
            w,
            h,
            min,
            max,
            mx,
            my,
            ring_thickness,
            margin,
            triangle_radius,
            side_length,
            left_x: w / 2.0 - side_length / 2.0,
            right_x: w / 2.0 + side_length / 2.0,
            top_y: my + ring_thickness,
            bottom_y: (h + triangle_radius) / 2.0,
        }
    }

    /// Geometric centre of the surface.
    pub fn center(&self) -> Point {
        Point::new(self.w / 2.0, self.h / 2.0)
    }

    /// Centre the ring is painted around (whole pixels).
    pub fn ring_center(&self) -> Point {
        Point::new((self.w / 2.0).floor(), (self.h / 2.0).floor())
    }

    /// Radius through the middle of the ring band.
    pub fn ring_mid_radius(&self) -> f64 {
        (self.min / 2.0).floor() - self.ring_thickness / 2.0
    }

    /// Height of the triangle from apex to base.
    pub fn vertical_extent(&self) -> f64 {
        1.5 * self.triangle_radius
    }

    pub fn apex(&self) -> Point {
        Point::new(self.w / 2.0, self.top_y)
    }

    pub fn base_left(&self) -> Point {
        Point::new(self.left_x, self.bottom_y)
    }

    pub fn base_right(&self) -> Point {
        Point::new(self.right_x, self.bottom_y)
    }

    /// Number of saturation rows painted from the apex down.
    pub fn row_count(&self) -> usize {
        (self.vertical_extent() + 1.0).ceil().max(0.0) as usize
    }

    /// Distance from the surface top to the row with index 0.
    pub fn row_offset(&self) -> f64 {
        self.h / 2.0 - self.triangle_radius
    }

    /// Saturation row `i`, counted down from the apex.
    pub fn saturation_row(&self, i: usize) -> SaturationRow {
        let cx = self.w / 2.0;
        let half_width = i as f64 / 3f64.sqrt();
        SaturationRow {
            y: i as f64 + self.row_offset(),
            half_width,
            start_x: cx + half_width - self.margin,
            end_x: cx - half_width + self.margin,
        }
    }

    /// Vertical span of the black overlay, from opaque to transparent.
    pub fn value_span(&self) -> (f64, f64) {
        let inset = self.margin + constants::GRADIENT_INSET;
        (self.top_y + inset, self.bottom_y - inset)
    }
}
