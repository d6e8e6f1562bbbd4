use crate::error::{GeometryError, Result};

use super::{Point3, Vector3};

/// Scales `v` to unit length.
///
/// The degeneracy check compares the *squared* magnitude against `eps`,
/// so the shortest vector this accepts has length `sqrt(eps)`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the squared magnitude of `v`
/// is below `eps`.
pub fn unit(v: &Vector3, eps: f64) -> Result<Vector3> {
    let len_sq = v.norm_squared();
    if len_sq < eps {
        return Err(GeometryError::ZeroVector);
    }
    Ok(v / len_sq.sqrt())
}

/// Unit direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the points coincide within
/// `eps`.
pub fn direction(a: &Point3, b: &Point3, eps: f64) -> Result<Vector3> {
    unit(&(b - a), eps)
}

/// Angle between `a` and `b` in radians, in `[0, π]`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if either input cannot be
/// unitized.
pub fn angle_between(a: &Vector3, b: &Vector3, eps: f64) -> Result<f64> {
    let d = unit(a, eps)?.dot(&unit(b, eps)?);
    Ok(d.clamp(-1.0, 1.0).acos())
}

/// Whether `a` and `b` point along the same or opposite direction.
///
/// True iff `1 - |dot(unit(a), unit(b))| < eps`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if either input cannot be
/// unitized.
pub fn parallel(a: &Vector3, b: &Vector3, eps: f64) -> Result<bool> {
    let d = unit(a, eps)?.dot(&unit(b, eps)?);
    Ok(1.0 - d.abs() < eps)
}

/// Rotates `v` about `axis` by `angle` radians (Rodrigues' formula).
///
/// The axis is unitized internally; the rotation is counter-clockwise
/// when viewed against the axis direction.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `axis` cannot be unitized.
pub fn rotate_about_axis(v: &Vector3, axis: &Vector3, angle: f64, eps: f64) -> Result<Vector3> {
    let u = unit(axis, eps)?;
    let (sin, cos) = angle.sin_cos();
    Ok(v * cos + u.cross(v) * sin + u * (u.dot(v) * (1.0 - cos)))
}

/// Angle of the XY projection of `v` against the positive X-axis, in
/// `(-π, π]`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the squared magnitude of the
/// XY projection is below `eps` (the angle of a near-zero vector is
/// noise).
pub fn angle_2d(v: &Vector3, eps: f64) -> Result<f64> {
    if v.x * v.x + v.y * v.y < eps {
        return Err(GeometryError::ZeroVector);
    }
    Ok(v.y.atan2(v.x))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::TOLERANCE;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    // ── unit ──

    #[test]
    fn unit_has_magnitude_one() {
        let u = unit(&v(3.0, 4.0, 0.0), TOLERANCE).unwrap();
        assert!((u.norm() - 1.0).abs() < TOLERANCE);
        assert_relative_eq!(u.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(u.y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn unit_rejects_near_zero_vector() {
        let result = unit(&v(1e-4, 0.0, 0.0), TOLERANCE);
        assert!(matches!(result, Err(GeometryError::ZeroVector)));
    }

    #[test]
    fn unit_accepts_vector_just_above_threshold() {
        // Squared magnitude 4e-6 is above the 1e-6 cutoff.
        let u = unit(&v(2e-3, 0.0, 0.0), TOLERANCE).unwrap();
        assert!((u.norm() - 1.0).abs() < TOLERANCE);
    }

    // ── direction ──

    #[test]
    fn direction_is_unit_and_parallel_to_difference() {
        let a = p(1.0, 2.0, 3.0);
        let b = p(4.0, 6.0, 3.0);
        let d = direction(&a, &b, TOLERANCE).unwrap();
        assert!((d.norm() - 1.0).abs() < TOLERANCE);
        // dot(direction, b - a) equals the distance, same sign.
        let dist = (b - a).norm();
        assert_relative_eq!(d.dot(&(b - a)), dist, epsilon = 1e-12);
    }

    #[test]
    fn direction_of_coincident_points_is_degenerate() {
        let a = p(1.0, 1.0, 1.0);
        assert!(direction(&a, &a, TOLERANCE).is_err());
    }

    // ── angle_between ──

    #[test]
    fn angle_between_orthogonal_vectors() {
        let t = angle_between(&v(1.0, 0.0, 0.0), &v(0.0, 2.0, 0.0), TOLERANCE).unwrap();
        assert_relative_eq!(t, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_opposite_vectors() {
        let t = angle_between(&v(1.0, 0.0, 0.0), &v(-3.0, 0.0, 0.0), TOLERANCE).unwrap();
        assert_relative_eq!(t, PI, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_propagates_degeneracy() {
        assert!(angle_between(&v(0.0, 0.0, 0.0), &v(1.0, 0.0, 0.0), TOLERANCE).is_err());
    }

    // ── parallel ──

    #[test]
    fn parallel_same_direction() {
        assert!(parallel(&v(1.0, 1.0, 0.0), &v(2.0, 2.0, 0.0), TOLERANCE).unwrap());
    }

    #[test]
    fn parallel_opposite_direction() {
        assert!(parallel(&v(1.0, 1.0, 0.0), &v(-5.0, -5.0, 0.0), TOLERANCE).unwrap());
    }

    #[test]
    fn parallel_rejects_orthogonal() {
        assert!(!parallel(&v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0), TOLERANCE).unwrap());
    }

    // ── rotate_about_axis ──

    #[test]
    fn rotate_quarter_turn_about_z() {
        let r = rotate_about_axis(&v(1.0, 0.0, 0.0), &v(0.0, 0.0, 1.0), PI / 2.0, TOLERANCE)
            .unwrap();
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_full_turn_is_identity() {
        let input = v(1.0, 2.0, 3.0);
        let r = rotate_about_axis(&input, &v(0.3, -0.2, 0.9), 2.0 * PI, TOLERANCE).unwrap();
        assert_relative_eq!(r.x, input.x, epsilon = 1e-9);
        assert_relative_eq!(r.y, input.y, epsilon = 1e-9);
        assert_relative_eq!(r.z, input.z, epsilon = 1e-9);
    }

    #[test]
    fn rotate_preserves_magnitude() {
        let input = v(2.0, -1.0, 4.0);
        let r = rotate_about_axis(&input, &v(1.0, 1.0, 0.0), 1.234, TOLERANCE).unwrap();
        assert_relative_eq!(r.norm(), input.norm(), epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_zero_axis_is_degenerate() {
        assert!(rotate_about_axis(&v(1.0, 0.0, 0.0), &v(0.0, 0.0, 0.0), 1.0, TOLERANCE).is_err());
    }

    // ── angle_2d ──

    #[test]
    fn angle_2d_quadrants() {
        let t = angle_2d(&v(1.0, 1.0, 0.0), TOLERANCE).unwrap();
        assert_relative_eq!(t, PI / 4.0, epsilon = 1e-12);
        let t = angle_2d(&v(-1.0, 0.0, 0.0), TOLERANCE).unwrap();
        assert_relative_eq!(t, PI, epsilon = 1e-12);
        let t = angle_2d(&v(0.0, -1.0, 0.0), TOLERANCE).unwrap();
        assert_relative_eq!(t, -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_2d_ignores_z() {
        // A vector with only a z component has no 2D angle.
        assert!(angle_2d(&v(0.0, 0.0, 5.0), TOLERANCE).is_err());
    }
}
