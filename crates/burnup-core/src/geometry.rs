// File: crates/burnup-core/src/geometry.rs
// Summary: Segment intersection (Bourke's determinant form) for projection math.

use crate::types::{Point, Segment};

/// Intersection of two segments, or `None` when either segment is
/// degenerate, the lines are parallel/coincident, or the crossing falls
/// outside either segment.
pub fn intersect(a: &Segment, b: &Segment) -> Option<Point> {
    if a.is_degenerate() || b.is_degenerate() {
        return None;
    }

    let (x1, y1, x2, y2) = (a.start.x, a.start.y, a.end.x, a.end.y);
    let (x3, y3, x4, y4) = (b.start.x, b.start.y, b.end.x, b.end.y);

    let denominator = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denominator == 0.0 {
        return None;
    }

    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denominator;
    let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denominator;

    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }

    Some(a.point_at(ua))
}
