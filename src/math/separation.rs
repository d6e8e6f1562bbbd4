use crate::error::Result;

use super::classify::{classify_points_with, PointSetDimension};
use super::{vector, Triangle, Vector3, TOLERANCE};

/// Outcome of the separating-axis search for a pair of triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Intrinsic dimension of the combined vertex set.
    pub dimension: PointSetDimension,
    /// Whether a separating axis exists.
    pub separated: bool,
    /// The separating axis, oriented so the second triangle lies beyond
    /// the first. For point/line configurations this is the classifier's
    /// representative and carries no separation meaning; for a failed
    /// coplanar search it is the common plane normal.
    pub axis: Option<Vector3>,
}

/// Separating-axis test with the default [`TOLERANCE`].
///
/// # Errors
///
/// Propagates classification errors; see [`separating_axis_with`].
pub fn separating_axis(t1: &Triangle, t2: &Triangle) -> Result<Separation> {
    separating_axis_with(t1, t2, TOLERANCE)
}

/// Searches for a vector separating two triangles.
///
/// The combined six-vertex set is classified first, and the search
/// adapts to its intrinsic dimension:
///
/// - point or line configurations are reported as trivially separated;
/// - coplanar triangles scan the in-plane normals of every edge
///   (2D callers embed their triangles at `z = 0` and land here);
/// - triangles in general position scan cross products of each edge
///   with the spokes to the remaining vertices.
///
/// A candidate axis separates when one triangle's projections lie
/// strictly beyond the other's by more than `eps`. Touching triangles
/// are therefore reported as not separated.
///
/// # Errors
///
/// Returns an error only if classification of the combined vertex set
/// fails.
pub fn separating_axis_with(t1: &Triangle, t2: &Triangle, eps: f64) -> Result<Separation> {
    let combined = [t1[0], t1[1], t1[2], t2[0], t2[1], t2[2]];
    let dimension = classify_points_with(&combined, eps)?;

    match dimension {
        PointSetDimension::Point { .. } | PointSetDimension::Line { .. } => Ok(Separation {
            dimension,
            separated: true,
            axis: dimension.representative(),
        }),
        PointSetDimension::Plane { normal } => Ok(coplanar_separation(t1, t2, &normal, eps)),
        PointSetDimension::Volume => Ok(spatial_separation(t1, t2, eps)),
    }
}

/// Edge-normal search for coplanar triangles.
///
/// Candidate axes are the in-plane normals of every edge, scanned in a
/// fixed order: edges of `t1` in vertex order, then edges of `t2`.
fn coplanar_separation(t1: &Triangle, t2: &Triangle, normal: &Vector3, eps: f64) -> Separation {
    let dimension = PointSetDimension::Plane { normal: *normal };
    for tri in [t1, t2] {
        for i in 0..3 {
            let Ok(edge) = vector::direction(&tri[i], &tri[(i + 1) % 3], eps) else {
                // Zero-length edge of a degenerate triangle.
                continue;
            };
            let Ok(axis) = vector::unit(&edge.cross(normal), eps) else {
                continue;
            };
            if above(t1, t2, &axis, eps) {
                return Separation {
                    dimension,
                    separated: true,
                    axis: Some(axis),
                };
            }
            if above(t2, t1, &axis, eps) {
                return Separation {
                    dimension,
                    separated: true,
                    axis: Some(-axis),
                };
            }
        }
    }
    Separation {
        dimension,
        separated: false,
        axis: Some(*normal),
    }
}

/// Cross-product search for triangles in general position.
///
/// For each edge of each triangle, candidate axes are the cross products
/// of the edge vector with the spoke from the edge origin to every other
/// vertex of either triangle. The edge's own endpoints fall out through
/// the zero-magnitude and parallelism guards; the third vertex of the
/// edge's triangle contributes that triangle's face normal, and the
/// opposing vertices contribute the tilted edge-to-vertex axes.
fn spatial_separation(t1: &Triangle, t2: &Triangle, eps: f64) -> Separation {
    for (x1, x2) in [(t1, t2), (t2, t1)] {
        for i in 0..3 {
            let p = x1[i];
            let e1 = x1[(i + 1) % 3] - p;
            if e1.norm_squared() < eps {
                continue;
            }
            for q in x1.iter().chain(x2.iter()) {
                let e2 = q - p;
                if e2.norm_squared() < eps {
                    continue;
                }
                if vector::parallel(&e1, &e2, eps).unwrap_or(true) {
                    continue;
                }
                let Ok(axis) = vector::unit(&e1.cross(&e2), eps) else {
                    continue;
                };
                if above(t1, t2, &axis, eps) {
                    return Separation {
                        dimension: PointSetDimension::Volume,
                        separated: true,
                        axis: Some(axis),
                    };
                }
                if above(t2, t1, &axis, eps) {
                    return Separation {
                        dimension: PointSetDimension::Volume,
                        separated: true,
                        axis: Some(-axis),
                    };
                }
            }
        }
    }
    Separation {
        dimension: PointSetDimension::Volume,
        separated: false,
        axis: None,
    }
}

/// True iff the minimum projection of `qs` onto `axis` exceeds the
/// maximum projection of `ps` by more than `eps`.
fn above(ps: &Triangle, qs: &Triangle, axis: &Vector3, eps: f64) -> bool {
    let max_p = ps
        .iter()
        .map(|p| p.coords.dot(axis))
        .fold(f64::NEG_INFINITY, f64::max);
    let min_q = qs
        .iter()
        .map(|q| q.coords.dot(axis))
        .fold(f64::INFINITY, f64::min);
    min_q - max_p > eps
}
