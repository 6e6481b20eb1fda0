//! Random fields of non-overlapping convex polygons in ℝ².
//!
//! This library procedurally generates a bounded 2D plane populated with
//! randomly placed convex polygons, together with a start point on one edge
//! and a goal point on the opposite edge: an obstacle course for downstream
//! pathfinding or motion-planning consumers. No pathfinding happens here.
//!
//! Generation runs in two phases. The [`solver`] first places random candidate
//! polygons, rejecting any that overlap an accepted one, until a target area
//! density is reached; it then grows every accepted polygon outward as far as
//! the plane margin and its neighbours allow, producing a tight packing. The
//! result is a [`field::Field`], exportable to integer grid coordinates.
//!
//! All randomness flows through an explicit [`rand::Rng`] instance, so a
//! seeded generator reproduces a field exactly.
//!
//! # Basic usage
//! ```
//! use {polygen::solver::Generator, rand::SeedableRng};
//!
//! # fn main() -> polygen::error::Result<()> {
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let generator = Generator::new(500.0, 300.0)?;
//! let field = generator.render(&mut rng);
//!
//! let grid = field.to_grid();
//! assert!(!grid.shapes.is_empty());
//! assert_eq!(grid.start.x, 5);
//! assert_eq!(grid.goal.x, 495);
//! # Ok(())
//! # }
//! ```
//!
//! Density, radius bounds and the other knobs live on
//! [`solver::Config`]. Note its feasibility caveat: the placement loop has no
//! attempt ceiling and will not terminate on densities the plane cannot fit.

pub mod error;
pub mod field;
pub mod geometry;
pub mod solver;

#[cfg(test)] mod tests;
