use crate::error::{GeometryError, Result};

use super::{vector, Point3, Vector3, TOLERANCE};

/// Intrinsic dimension of a point set, with a representative direction
/// where one exists.
///
/// The anchoring rule is deterministic but order-dependent: the first
/// point is the anchor, and the first qualifying direction (and first
/// normal derived from it) is the representative. This is a tie-break
/// convention, not a geometric necessity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointSetDimension {
    /// All points coincide within tolerance.
    Point {
        /// The anchor point.
        anchor: Point3,
    },
    /// The points are collinear.
    Line {
        /// Unit direction from the anchor to the first distinct point.
        direction: Vector3,
    },
    /// The points are coplanar but not collinear.
    Plane {
        /// Unit normal of the common plane.
        normal: Vector3,
    },
    /// The points span all of 3-space.
    Volume,
}

impl PointSetDimension {
    /// Numeric rank: 0 for a point, 1 for a line, 2 for a plane,
    /// 3 for general position.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Self::Point { .. } => 0,
            Self::Line { .. } => 1,
            Self::Plane { .. } => 2,
            Self::Volume => 3,
        }
    }

    /// Representative direction or normal, if one exists.
    ///
    /// For a coincident point set this is the anchor's coordinate
    /// vector; a general-position set has no single representative.
    #[must_use]
    pub fn representative(&self) -> Option<Vector3> {
        match self {
            Self::Point { anchor } => Some(anchor.coords),
            Self::Line { direction } => Some(*direction),
            Self::Plane { normal } => Some(*normal),
            Self::Volume => None,
        }
    }
}

/// Classifies a point set with the default [`TOLERANCE`].
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] for an empty slice.
pub fn classify_points(points: &[Point3]) -> Result<PointSetDimension> {
    classify_points_with(points, TOLERANCE)
}

/// Classifies the intrinsic dimension of a point set.
///
/// A greedy consistency check, not a least-squares fit: exact for exact
/// inputs, epsilon-bounded for noisy ones.
///
/// 1. Collect unit directions from the anchor (first point) to every
///    point farther than `eps` in squared distance.
/// 2. No directions: the set is a single point.
/// 3. All directions parallel to the first: collinear.
/// 4. Otherwise form `unit(cross(d, d0))` for each direction not
///    parallel to the first; if all such normals agree the set is
///    coplanar.
/// 5. Otherwise the set spans 3-space.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] for an empty slice.
pub fn classify_points_with(points: &[Point3], eps: f64) -> Result<PointSetDimension> {
    let Some((anchor, rest)) = points.split_first() else {
        return Err(GeometryError::Degenerate("empty point set".into()));
    };

    // Unit directions to every point not coincident with the anchor.
    // `unit` rejects exactly the points within eps squared distance.
    let mut dirs: Vec<Vector3> = Vec::with_capacity(rest.len());
    for point in rest {
        if let Ok(dir) = vector::unit(&(point - anchor), eps) {
            dirs.push(dir);
        }
    }

    let Some((d0, other_dirs)) = dirs.split_first() else {
        return Ok(PointSetDimension::Point { anchor: *anchor });
    };

    // Normals of the planes spanned by d0 and each non-parallel direction.
    let mut normals: Vec<Vector3> = Vec::new();
    for dir in other_dirs {
        if vector::parallel(dir, d0, eps)? {
            continue;
        }
        normals.push(vector::unit(&dir.cross(d0), eps)?);
    }

    let Some((n0, other_normals)) = normals.split_first() else {
        return Ok(PointSetDimension::Line { direction: *d0 });
    };

    for normal in other_normals {
        if !vector::parallel(normal, n0, eps)? {
            return Ok(PointSetDimension::Volume);
        }
    }

    Ok(PointSetDimension::Plane { normal: *n0 })
}
