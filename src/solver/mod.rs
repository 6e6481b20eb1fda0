//! Two-phase field solver.
//!
//! [`Generator::render`] first places random candidate polygons until a target
//! area density is reached ([`placement`]), then grows every accepted polygon
//! into the remaining space ([`packing`]), and finally pins a start point on
//! the low-`x` edge and a goal point on the high-`x` edge.

mod packing;
mod placement;

use {
  crate::{
    error::{Error, Result},
    field::Field,
    geometry::Plane
  },
  euclid::Point2D,
  rand::{Rng, SeedableRng}
};

/// Solver parameters. The defaults reproduce the canonical field: density
/// 0.38, radii derived from the plane width, a 100-attempt vertex retry
/// ceiling, and a packing step of 2 world units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  /// Placement stops once `Σ area / usable area` reaches this value.
  ///
  /// Values close to the geometric packing limit of the plane make
  /// [`Generator::render`] spin forever; keep well below it.
  pub target_density: f32,
  /// `(min, max)` bounds for candidate radii; `None` derives
  /// `(width / 45, width / 5)` from the plane.
  pub radius_bounds: Option<(f32, f32)>,
  /// Attempts per vertex before the minimum-separation constraint is waived.
  /// The on-map constraint is never waived.
  pub vertex_retry_limit: u32,
  /// Radius decrement of the packing pass.
  pub growth_step: f32,
  /// Restart placement from scratch once this many shapes accumulate without
  /// reaching the target density; `None` never restarts.
  pub restart_after: Option<usize>
}

impl Default for Config {
  fn default() -> Self {
    Config {
      target_density: 0.38,
      radius_bounds: None,
      vertex_retry_limit: 100,
      growth_step: 2.0,
      restart_after: None
    }}}

impl Config {
  pub(crate) fn radii(&self, plane: &Plane) -> (f32, f32) {
    self.radius_bounds
      .unwrap_or((plane.width / 45.0, plane.width / 5.0))
  }

  fn validate(&self, plane: &Plane) -> Result<()> {
    if !(self.target_density > 0.0 && self.target_density < 1.0) {
      return Err(Error::InvalidDensity(self.target_density));
    }
    let (min, max) = self.radii(plane);
    if !(min > 0.0 && min <= max) {
      return Err(Error::InvalidRadiusBounds { min, max });
    }
    if !(self.growth_step > 0.0) {
      return Err(Error::InvalidGrowthStep(self.growth_step));
    }
    Ok(())
  }
}

/// Field generator for one plane and one parameter set.
///
/// Holds no field state: every [`render`](Self::render) call produces an
/// independent new [`Field`] from the generator instance passed in.
#[derive(Debug, Copy, Clone)]
pub struct Generator {
  plane: Plane,
  config: Config
}

impl Generator {
  /// A generator over a `width × height` plane with the canonical margin and
  /// the default [`Config`].
  pub fn new(width: f32, height: f32) -> Result<Self> {
    Self::with_config(width, height, Config::default())
  }

  pub fn with_config(width: f32, height: f32, config: Config) -> Result<Self> {
    let plane = Plane::new(width, height)?;
    config.validate(&plane)?;
    Ok(Generator { plane, config })
  }

  pub fn plane(&self) -> Plane {
    self.plane
  }

  pub fn config(&self) -> Config {
    self.config
  }

  /// Render a new field: placement, packing, then start/goal assignment.
  ///
  /// All randomness flows through `rng`; rendering twice from generators in
  /// the same state yields identical fields. Does not return if the target
  /// density is geometrically unreachable for this plane (see
  /// [`Config::target_density`]); callers feeding untrusted parameters must
  /// wrap the call in their own timeout.
  pub fn render<R: Rng>(&self, rng: &mut R) -> Field {
    let mut shapes = placement::place(&self.plane, &self.config, rng);
    packing::pack(&self.plane, &self.config, &mut shapes);
    let start = Point2D::new(self.plane.margin, self.sample_gate(rng));
    let goal = Point2D::new(self.plane.width - self.plane.margin, self.sample_gate(rng));
    Field { plane: self.plane, shapes, start, goal }
  }

  /// [`render`](Self::render) with a fresh [`rand_pcg::Pcg64`] seeded from
  /// `seed`; the reproducibility shorthand.
  pub fn render_seeded(&self, seed: u64) -> Field {
    self.render(&mut rand_pcg::Pcg64::seed_from_u64(seed))
  }

  fn sample_gate<R: Rng>(&self, rng: &mut R) -> f32 {
    rng.gen_range(self.plane.height / 4.0 ..= self.plane.height * 3.0 / 4.0)
  }
}
