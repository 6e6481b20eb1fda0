//! Accept/reject placement until the target density is reached.

use {
  super::Config,
  crate::geometry::{Plane, Polygon},
  log::{debug, trace},
  rand::Rng
};

/// Ratio of summed shape area to the usable map area.
pub(super) fn coverage(shapes: &[Polygon], plane: &Plane) -> f32 {
  shapes.iter().map(Polygon::area).sum::<f32>() / plane.usable_area()
}

/// Sample candidate polygons, discard any that strong-overlap an accepted one,
/// and keep going until [`coverage`] reaches the configured target.
///
/// This is an accept/reject loop with no attempt ceiling; feasibility of the
/// target density is the caller's responsibility.
pub(super) fn place<R: Rng>(plane: &Plane, config: &Config, rng: &mut R) -> Vec<Polygon> {
  let (min_radius, max_radius) = config.radii(plane);
  let mut shapes: Vec<Polygon> = vec![];
  loop {
    if let Some(limit) = config.restart_after {
      if shapes.len() > limit {
        debug!("{} shapes without reaching density {}, restarting",
          shapes.len(), config.target_density);
        shapes.clear();
      }
    }
    let accepted = loop {
      let center = plane.sample_point(rng);
      let radius = rng.gen_range(min_radius..=max_radius);
      let candidate = Polygon::sample(plane, center, radius, config.vertex_retry_limit, rng);
      if shapes.iter().all(|shape| !shape.strong_overlap(&candidate)) {
        break candidate;
      }
      trace!("candidate at ({:.1}, {:.1}), r = {:.1} rejected", center.x, center.y, radius);
    };
    shapes.push(accepted);
    if coverage(&shapes, plane) >= config.target_density {
      break;
    }
  }
  debug!("{} shapes placed, density {:.3}", shapes.len(), coverage(&shapes, plane));
  shapes
}
