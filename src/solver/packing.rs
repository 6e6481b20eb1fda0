//! Post-placement packing: grow every shape into whatever space is left.

use {
  super::Config,
  crate::geometry::{Plane, Polygon},
  log::debug
};

/// Grow each shape as far as the plane and its neighbours allow.
///
/// Probes at twice the placement radius and steps the probe down by
/// `config.growth_step` while the shape sticks out of the margin or
/// strong-overlaps any other shape. Falls back to the placement radius, which
/// is known collision-free, so the field's non-overlap invariant survives.
pub(super) fn pack(plane: &Plane, config: &Config, shapes: &mut [Polygon]) {
  for i in 0..shapes.len() {
    let original = shapes[i].radius();
    let mut radius = original * 2.0;
    loop {
      shapes[i].grow(radius);
      if plane.holds(&shapes[i].bounding_box()) && clear_of_others(shapes, i) {
        break;
      }
      radius -= config.growth_step;
      if radius <= original {
        shapes[i].grow(original);
        break;
      }
    }
    if shapes[i].radius() > original {
      debug!("shape {} grown {:.1} -> {:.1}", i, original, shapes[i].radius());
    }
  }
}

fn clear_of_others(shapes: &[Polygon], index: usize) -> bool {
  shapes.iter().enumerate()
    .filter(|&(other, _)| other != index)
    .all(|(_, shape)| !shape.strong_overlap(&shapes[index]))
}
