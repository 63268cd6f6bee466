//! Hit testing against the triangle and hue ring, and clamping drags back
//! into the triangle.
//!
//! The triangle test is a bounding box check followed by two angle checks:
//! each slanted edge leaves its base vertex at 60°, so a pointer is past an
//! edge when the angle from that vertex to the pointer is steeper than 60°.
//! The margin added to each denominator keeps the slopes finite.

use crate::measure::{Measurements, Point};

/// Where a pointer lies relative to the selectable part of the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleHit {
    Inside,
    OutsideBoundingBox,
    OutsideRightEdge,
    OutsideLeftEdge,
}

impl TriangleHit {
    pub fn is_inside(self) -> bool {
        self == TriangleHit::Inside
    }
}

/// Classify `p` against the triangle (shrunk by the margin).
pub fn classify(p: Point, m: &Measurements) -> TriangleHit {
    let margin = m.margin;

    // 2 * margin at the top so the edge clamps can't push the marker past the margin
    if p.y > m.bottom_y - margin
        || p.x < m.left_x + margin
        || p.x > m.right_x - margin
        || p.y < m.top_y + 2.0 * margin
    {
        return TriangleHit::OutsideBoundingBox;
    }

    let right = ((p.y - m.bottom_y) / (p.x - m.right_x + margin)).atan().to_degrees();
    if right > 60.0 {
        return TriangleHit::OutsideRightEdge;
    }

    let left = ((p.y - m.bottom_y) / (p.x - m.left_x - margin)).atan().to_degrees();
    if left < -60.0 {
        return TriangleHit::OutsideLeftEdge;
    }

    TriangleHit::Inside
}

/// True when `p` lies strictly inside the hue ring band.
pub fn in_ring(p: Point, m: &Measurements) -> bool {
    let c = m.center();
    let dist = (p.x - c.x).hypot(p.y - c.y);
    dist > m.triangle_radius && dist < m.triangle_radius + m.ring_thickness
}

/// Move `p` onto the nearest selectable position of the triangle.
///
/// The bounding box clamp runs first; a point it fixes can still sit past a
/// slanted edge, so the point is classified again before the edge clamp.
pub fn clamp_to_triangle(mut p: Point, m: &Measurements) -> Point {
    let margin = m.margin;
    let mut hit = classify(p, m);

    if hit == TriangleHit::OutsideBoundingBox {
        if p.y > m.bottom_y - margin {
            p.y = m.bottom_y - margin;
        }
        if p.y < m.top_y + 2.0 * margin {
            p.y = m.top_y + 2.0 * margin;
        }
        if p.x > m.right_x - margin {
            p.x = m.right_x - margin - 1.0;
        }
        if p.x < m.left_x + margin {
            p.x = m.left_x + margin + 1.0;
        }
        hit = classify(p, m);
    }

    let c = m.center();
    // edges run at x = cx ± (depth below apex) / sqrt(3)
    let half_width = (p.y - c.y + m.triangle_radius) / 3f64.sqrt();
    match hit {
        TriangleHit::OutsideRightEdge => p.x = c.x + half_width - margin,
        TriangleHit::OutsideLeftEdge => p.x = c.x - half_width + margin,
        TriangleHit::Inside | TriangleHit::OutsideBoundingBox => {}
    }

    p
}
