//! .
//!
//! The origin of the coordinate system is in the top-left corner; `x` grows to
//! the right, `y` grows down. All solver arithmetic happens in [`WorldSpace`];
//! the exported integer coordinates live in [`GridSpace`].

use {
  euclid::{Box2D, Point2D},
  rand::Rng,
  crate::error::{Error, Result}
};

pub mod predicates;
pub mod polygon;
pub use polygon::{Polygon, Vertex};

/// Floating-point coordinate basis of the solver.
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;
/// Integer coordinate basis of exported fields.
#[derive(Debug, Copy, Clone)]
pub struct GridSpace;

/// Inward inset between the plane boundary and the sub-region shapes may occupy.
pub const MARGIN: f32 = 5.0;

/// The bounded region shapes are placed on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
  pub width: f32,
  pub height: f32,
  pub margin: f32
}

impl Plane {
  /// A plane with the canonical [`MARGIN`].
  pub fn new(width: f32, height: f32) -> Result<Self> {
    Self::with_margin(width, height, MARGIN)
  }

  pub fn with_margin(width: f32, height: f32, margin: f32) -> Result<Self> {
    let degenerate = !width.is_finite() || !height.is_finite()
      || margin < 0.0
      || width <= margin * 2.0
      || height <= margin * 2.0;
    if degenerate {
      return Err(Error::DegeneratePlane { width, height, margin });
    }
    Ok(Plane { width, height, margin })
  }

  /// The on-map sub-region, inset by the margin on every side.
  pub fn interior(&self) -> Box2D<f32, WorldSpace> {
    Box2D::new(
      Point2D::splat(self.margin),
      Point2D::new(self.width - self.margin, self.height - self.margin)
    )}

  /// Area of the [`interior`](Self::interior); the denominator of field density.
  pub fn usable_area(&self) -> f32 {
    let size = self.interior().size();
    size.width * size.height
  }

  /// Whether a point lies on the map, margin boundary included.
  pub fn on_map(&self, point: Point2D<f32, WorldSpace>) -> bool {
    let b = self.interior();
    point.x >= b.min.x && point.x <= b.max.x &&
    point.y >= b.min.y && point.y <= b.max.y
  }

  /// Whether a bounding box lies strictly inside the margin.
  pub fn holds(&self, bounds: &Box2D<f32, WorldSpace>) -> bool {
    let b = self.interior();
    bounds.min.x > b.min.x && bounds.max.x < b.max.x &&
    bounds.min.y > b.min.y && bounds.max.y < b.max.y
  }

  /// Uniform point over the interior.
  pub fn sample_point<R: Rng>(&self, rng: &mut R) -> Point2D<f32, WorldSpace> {
    let b = self.interior();
    Point2D::new(
      rng.gen_range(b.min.x..=b.max.x),
      rng.gen_range(b.min.y..=b.max.y)
    )}
}
