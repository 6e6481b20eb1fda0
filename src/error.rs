//! .
//!
//! Errors here only ever come from constructor-time validation; the solver
//! loops themselves are infallible, see
//! [`Generator::render`](crate::solver::Generator::render) for the
//! non-termination caveat.

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
  /// The plane leaves no interior region once the margin is applied.
  #[error("plane {width}×{height} has no interior inside a margin of {margin}")]
  DegeneratePlane { width: f32, height: f32, margin: f32 },
  /// Target density must lie strictly inside `(0, 1)`.
  #[error("target density {0} is outside (0, 1)")]
  InvalidDensity(f32),
  /// Candidate radii must be positive and ordered.
  #[error("radius bounds [{min}, {max}] are not ordered positive values")]
  InvalidRadiusBounds { min: f32, max: f32 },
  /// The packing pass must shrink its probe by a positive amount.
  #[error("growth step {0} is not positive")]
  InvalidGrowthStep(f32),
}
