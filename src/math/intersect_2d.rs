use super::{Point3, Vector3};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if the
/// determinant is nonzero.
///
/// The determinant check is exact, not tolerance-banded: lines that are
/// parallel within tolerance but not exactly parallel still solve and
/// yield large parameters. The algebraic solve is kept distinct from the
/// epsilon-based degeneracy checks elsewhere.
#[must_use]
pub fn line_line_params_2d(
    p1: &Point3,
    d1: &Vector3,
    p2: &Point3,
    d2: &Vector3,
) -> Option<(f64, f64)> {
    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom == 0.0 {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / denom;
    let u = (dx * d1.y - dy * d1.x) / denom;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns the intersection point only when both parameters lie in
/// `[0, 1]`, i.e. the point falls within both segments.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
) -> Option<Point3> {
    let da = Vector3::new(a1.x - a0.x, a1.y - a0.y, 0.0);
    let db = Vector3::new(b1.x - b0.x, b1.y - b0.y, 0.0);
    let (t, u) = line_line_params_2d(a0, &da, b0, &db)?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(point_at(a0, &da, t))
    } else {
        None
    }
}

/// Unbounded line-line intersection in 2D.
///
/// Returns the intersection point whenever the lines are not exactly
/// parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point3,
    d1: &Vector3,
    p2: &Point3,
    d2: &Vector3,
) -> Option<Point3> {
    let (t, _) = line_line_params_2d(p1, d1, p2, d2)?;
    Some(point_at(p1, d1, t))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point3, dir: &Vector3, t: f64) -> Point3 {
    Point3::new(origin.x + dir.x * t, origin.y + dir.y * t, origin.z)
}

/// Overlap test for `(lo, hi)` intervals that need not be pre-sorted.
#[must_use]
pub fn interval_overlap(a: (f64, f64), b: (f64, f64)) -> bool {
    let (a_lo, a_hi) = if a.0 <= a.1 { a } else { (a.1, a.0) };
    let (b_lo, b_hi) = if b.0 <= b.1 { b } else { (b.1, b.0) };
    a_lo <= b_hi && b_lo <= a_hi
}

/// 2D orientation value of `r` relative to the directed line `p → q`.
///
/// Positive when `r` lies to the left, negative to the right.
fn orient_2d(p: &Point3, q: &Point3, r: &Point3) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// Fast crossing predicate for non-collinear segments.
///
/// Rejects via bounding-interval disjointness on x and y independently,
/// then confirms that each segment's endpoints lie on strictly opposite
/// sides of the other segment's line. Unreliable for exactly collinear
/// segments.
#[must_use]
pub fn segments_cross_2d(a0: &Point3, a1: &Point3, b0: &Point3, b1: &Point3) -> bool {
    if !interval_overlap((a0.x, a1.x), (b0.x, b1.x))
        || !interval_overlap((a0.y, a1.y), (b0.y, b1.y))
    {
        return false;
    }
    orient_2d(a0, a1, b0) * orient_2d(a0, a1, b1) < 0.0
        && orient_2d(b0, b1, a0) * orient_2d(b0, b1, a1) < 0.0
}
