//! Rendered fields and their integer-grid export.

use {
  crate::geometry::{GridSpace, Plane, Polygon, WorldSpace},
  euclid::Point2D
};

/// A rendered obstacle field: the accepted polygons plus a start point on the
/// low-`x` edge and a goal point on the high-`x` edge.
///
/// Immutable once produced by
/// [`Generator::render`](crate::solver::Generator::render).
#[derive(Debug, Clone)]
pub struct Field {
  pub(crate) plane: Plane,
  pub(crate) shapes: Vec<Polygon>,
  pub(crate) start: Point2D<f32, WorldSpace>,
  pub(crate) goal: Point2D<f32, WorldSpace>
}

impl Field {
  pub fn plane(&self) -> Plane {
    self.plane
  }

  pub fn shapes(&self) -> &[Polygon] {
    &self.shapes
  }

  pub fn start(&self) -> Point2D<f32, WorldSpace> {
    self.start
  }

  pub fn goal(&self) -> Point2D<f32, WorldSpace> {
    self.goal
  }

  /// Achieved area density over the usable map area.
  pub fn density(&self) -> f32 {
    self.shapes.iter().map(Polygon::area).sum::<f32>() / self.plane.usable_area()
  }

  /// Rounded integer rendition, ring order preserved.
  pub fn to_grid(&self) -> GridField {
    GridField {
      shapes: self.shapes.iter()
        .map(|shape| shape.vertices().iter()
          .map(|vertex| to_grid_space(vertex.position))
          .collect())
        .collect(),
      start: to_grid_space(self.start),
      goal: to_grid_space(self.goal)
    }
  }
}

/// Integer-grid rendition of a [`Field`], in the format downstream consumers
/// take: one vertex ring per shape, vertices in ring order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridField {
  pub shapes: Vec<Vec<Point2D<i32, GridSpace>>>,
  pub start: Point2D<i32, GridSpace>,
  pub goal: Point2D<i32, GridSpace>
}

fn to_grid_space(point: Point2D<f32, WorldSpace>) -> Point2D<i32, GridSpace> {
  point.round().cast::<i32>().cast_unit()
}

#[cfg(test)] mod tests {
  use super::*;

  #[test] fn rounding_to_grid() {
    assert_eq!(to_grid_space(Point2D::new(3.4, 7.6)), Point2D::new(3, 8));
    assert_eq!(to_grid_space(Point2D::new(495.0, 0.5)), Point2D::new(495, 1));
  }
}
