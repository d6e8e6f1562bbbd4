use super::{Point3, TOLERANCE};

/// Minimum distance from `point` to the segment `a → b` in the XY plane.
#[must_use]
pub fn point_to_segment_dist(point: &Point3, a: &Point3, b: &Point3) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return (point.x - a.x).hypot(point.y - a.y);
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;
    (point.x - closest_x).hypot(point.y - closest_y)
}
