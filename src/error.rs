use thiserror::Error;

/// Errors produced by geometric computations.
///
/// Every variant describes a recoverable degeneracy; callers branch on
/// the reason and pick a fallback instead of catching a panic.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("points are collinear")]
    Collinear,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
