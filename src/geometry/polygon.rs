//! Convex polygons grown outward from a center point.

use {
  super::{predicates, Plane, WorldSpace},
  euclid::{Box2D, Point2D, Vector2D as V2},
  itertools::Itertools,
  log::trace,
  rand::Rng,
  std::f32::consts::TAU
};

/// Boundary point of a [`Polygon`].
#[derive(Debug, Copy, Clone)]
pub struct Vertex {
  pub position: Point2D<f32, WorldSpace>,
  /// Minimum distance to sibling vertices during ring construction.
  pub min_separation: f32,
  /// Final angular position around the owning polygon's center; the ring is
  /// sorted ascending by this value.
  pub angle: f32,
  generating_angle: f32
}

impl Vertex {
  fn at(center: Point2D<f32, WorldSpace>, radius: f32, angle: f32) -> Self {
    Vertex {
      position: center + V2::new(angle.cos(), angle.sin()) * radius,
      min_separation: radius,
      angle: 0.0,
      generating_angle: angle
    }}

  /// The angle this vertex was sampled at, fixed for its lifetime;
  /// [`Polygon::grow`] recomputes `position` from it.
  pub fn generating_angle(&self) -> f32 {
    self.generating_angle
  }

  /// Whether two sibling vertices clump together on the ring.
  pub fn too_close(&self, other: &Vertex) -> bool {
    (other.position - self.position).length() <= self.min_separation - 1.0
  }
}

/// A convex polygon: a center, a circumscribing radius, and a ring of boundary
/// vertices sorted by ascending [`Vertex::angle`].
#[derive(Debug, Clone)]
pub struct Polygon {
  center: Point2D<f32, WorldSpace>,
  radius: f32,
  vertices: Vec<Vertex>
}

impl Polygon {
  /// Random polygon at `center`: side count sampled in `3..=6`, vertices
  /// sampled on the circumscribing circle within `plane`.
  ///
  /// Each vertex retries while off-map or too close to an already placed
  /// sibling; after `retry_limit` attempts the separation constraint is
  /// waived, the on-map constraint never is.
  pub fn sample<R: Rng>(
    plane: &Plane,
    center: Point2D<f32, WorldSpace>,
    radius: f32,
    retry_limit: u32,
    rng: &mut R
  ) -> Self {
    let sides = rng.gen_range(3..=6);
    let mut poly = Polygon { center, radius, vertices: Vec::with_capacity(sides) };
    for _ in 0..sides {
      let mut attempts = 0u32;
      let vertex = loop {
        attempts += 1;
        let vertex = Vertex::at(center, radius, rng.gen_range(0.0..TAU));
        if !plane.on_map(vertex.position) {
          continue;
        }
        if !poly.vertices.iter().any(|sibling| sibling.too_close(&vertex)) {
          break vertex;
        }
        if attempts > retry_limit {
          trace!("vertex separation waived after {} attempts", attempts);
          break vertex;
        }
      };
      poly.vertices.push(vertex);
    }
    poly.sort_ring();
    poly
  }

  /// Deterministic construction from explicit generating angles.
  pub fn from_generating_angles(
    center: Point2D<f32, WorldSpace>,
    radius: f32,
    angles: &[f32]
  ) -> Self {
    let vertices = angles.iter()
      .map(|&angle| Vertex::at(center, radius, angle))
      .collect();
    let mut poly = Polygon { center, radius, vertices };
    poly.sort_ring();
    poly
  }

  /// Recompute final angles relative to the first vertex of the ring and sort
  /// ascending. The sort is stable, so equal angles keep their input order.
  fn sort_ring(&mut self) {
    let mut base = None;
    for vertex in &mut self.vertices {
      let d = vertex.position - self.center;
      let mut angle = d.y.atan2(d.x);
      match base {
        None => base = Some(angle),
        Some(base) if angle < base => angle += TAU,
        Some(_) => {}
      }
      vertex.angle = angle;
    }
    self.vertices.sort_by(|a, b| a.angle.total_cmp(&b.angle));
  }

  /// Set a new radius and recompute every vertex from its generating angle.
  ///
  /// This is the only mutation a finalized polygon supports. It is a pure
  /// function of `(center, radius, generating angles)`: growing back to a
  /// previous radius restores the previous coordinates exactly.
  pub fn grow(&mut self, radius: f32) {
    self.radius = radius;
    for vertex in &mut self.vertices {
      vertex.position = self.center
        + V2::new(vertex.generating_angle.cos(), vertex.generating_angle.sin()) * radius;
    }
  }

  pub fn center(&self) -> Point2D<f32, WorldSpace> {
    self.center
  }

  pub fn radius(&self) -> f32 {
    self.radius
  }

  pub fn sides(&self) -> usize {
    self.vertices.len()
  }

  pub fn vertices(&self) -> &[Vertex] {
    &self.vertices
  }

  /// Boundary edges in ring order, last vertex wrapping to the first.
  pub fn edges(&self) -> impl Iterator<Item = (Point2D<f32, WorldSpace>, Point2D<f32, WorldSpace>)> + '_ {
    self.vertices.iter()
      .circular_tuple_windows()
      .map(|(a, b)| (a.position, b.position))
  }

  /// Circumscribed-circle distance test: necessary, but not sufficient, for
  /// [`strong_overlap`](Self::strong_overlap).
  pub fn weak_overlap(&self, other: &Polygon) -> bool {
    (other.center - self.center).length() <= self.radius + other.radius
  }

  /// Authoritative collision test: any edge crossing, or either center inside
  /// the other polygon.
  pub fn strong_overlap(&self, other: &Polygon) -> bool {
    if !self.weak_overlap(other) {
      return false;
    }
    for (a1, a2) in self.edges() {
      for (b1, b2) in other.edges() {
        if predicates::segments_intersect(a1, a2, b1, b2) {
          return true;
        }
      }
    }
    self.contains(other.center) || other.contains(self.center)
  }

  /// Ray-casting parity test. Casts a ray from `point` directly away from this
  /// polygon's center, far enough to clear the circumscribing circle, and
  /// counts boundary crossings; odd parity means `point` is inside.
  ///
  /// One-directional: deciding containment between two polygons takes one call
  /// per direction.
  pub fn contains(&self, point: Point2D<f32, WorldSpace>) -> bool {
    let d = point - self.center;
    let away = d.y.atan2(d.x);
    let reach = self.radius * 2.0 + 2.0 * predicates::TOLERANCE as f32;
    let anchor = point + V2::new(away.cos(), away.sin()) * reach;
    let crossings = self.edges()
      .filter(|&(a, b)| predicates::segments_intersect(a, b, point, anchor))
      .count();
    crossings % 2 == 1
  }

  /// Axis-aligned bounding box of the vertex ring (the "reduction").
  pub fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    Box2D::from_points(self.vertices.iter().map(|v| v.position))
  }

  /// Area by the shoelace formula; requires the ring to be angle-sorted, which
  /// every constructor guarantees.
  pub fn area(&self) -> f32 {
    let ring: Vec<_> = self.vertices.iter().map(|v| v.position).collect();
    predicates::signed_area(&ring).abs()
  }
}
