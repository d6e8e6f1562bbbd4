pub mod classify;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod separation;
pub mod vector;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// A triangle as three vertices. Vertex order defines the winding;
/// edge `i` runs from vertex `i` to vertex `(i + 1) % 3`.
pub type Triangle = [Point3; 3];

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-6;
