//! Segment predicates and ring measures.
//!
//! The tolerance here is deliberately coarse. The solver works on planes a few
//! hundred units wide, and a classification band of [`TOLERANCE`] units keeps
//! near-vertical and near-parallel edges from flipping between branches; it is
//! not a numerical noise floor.

use {
  euclid::Point2D,
  num_traits::Float
};

/// Classification band for the "vertical", "equal slope" and "equal intercept"
/// tests, in world units.
pub const TOLERANCE: f64 = 2.0;

fn tolerance<T: Float>() -> T {
  T::from(TOLERANCE).unwrap()
}

/// `true` iff `a` and `b` agree within [`TOLERANCE`].
pub fn nearly_equal<T: Float>(a: T, b: T) -> bool {
  (a - b).abs() < tolerance()
}

fn is_vertical<T: Float>(x1: T, x2: T) -> bool {
  (x2 - x1).abs() < tolerance()
}

/// `true` iff `p` falls between `a` and `b`, in either order, ends included.
fn on_span<T: Float>(p: T, a: T, b: T) -> bool {
  a.min(b) <= p && p <= a.max(b)
}

fn spans_overlap<T: Float>(a1: T, a2: T, b1: T, b2: T) -> bool {
  !(a1.max(a2) < b1.min(b2) || b1.max(b2) < a1.min(a2))
}

/// `y = a·x + b` through two non-vertical points.
fn line_equation<T: Float, S>(p: Point2D<T, S>, q: Point2D<T, S>) -> (T, T) {
  let a = (q.y - p.y) / (q.x - p.x);
  (a, p.y - a * p.x)
}

/// Whether the closed segments `p1p2` and `p3p4` intersect, endpoints included.
///
/// Vertical segments (`|Δx| < TOLERANCE`) are branched on explicitly:
/// two verticals intersect iff they share an `x` and their `y` ranges overlap;
/// a single vertical is resolved against the other segment's line equation,
/// with the vertical's `x` required to fall on that segment's `x` range
/// (the `y` check alone is blind to `x` for horizontal segments).
/// Equal-slope pairs intersect iff they are also collinear (equal intercept)
/// and their `x` ranges overlap. Every input produces a definite boolean.
pub fn segments_intersect<T: Float, S>(
  p1: Point2D<T, S>, p2: Point2D<T, S>,
  p3: Point2D<T, S>, p4: Point2D<T, S>
) -> bool {
  match (is_vertical(p1.x, p2.x), is_vertical(p3.x, p4.x)) {
    (true, true) =>
      is_vertical(p1.x, p3.x) && spans_overlap(p1.y, p2.y, p3.y, p4.y),
    (true, false) => {
      let (a, b) = line_equation(p3, p4);
      let y = a * p1.x + b;
      on_span(y, p1.y, p2.y) && on_span(y, p3.y, p4.y) && on_span(p1.x, p3.x, p4.x)
    },
    (false, true) => {
      let (a, b) = line_equation(p1, p2);
      let y = a * p3.x + b;
      on_span(y, p1.y, p2.y) && on_span(y, p3.y, p4.y) && on_span(p3.x, p1.x, p2.x)
    },
    (false, false) => {
      let (a1, b1) = line_equation(p1, p2);
      let (a2, b2) = line_equation(p3, p4);
      if nearly_equal(a1, a2) {
        // parallel; collinear iff the intercepts agree as well
        return nearly_equal(b1, b2) && spans_overlap(p1.x, p2.x, p3.x, p4.x);
      }
      let x = -(b1 - b2) / (a1 - a2);
      on_span(x, p1.x, p2.x) && on_span(x, p3.x, p4.x)
    }
  }
}

/// Signed shoelace sum over an ordered ring, halved. Positive for rings sorted
/// by ascending angle; meaningless for self-intersecting rings.
pub fn signed_area<T: Float, S>(ring: &[Point2D<T, S>]) -> T {
  if ring.len() < 3 {
    return T::zero();
  }
  let mut sum = T::zero();
  for i in 0..ring.len() {
    let p = ring[i];
    let q = ring[(i + 1) % ring.len()];
    sum = sum + (p.x * q.y - q.x * p.y);
  }
  sum / (T::one() + T::one())
}

#[cfg(test)] mod tests {
  use super::*;
  use euclid::default::Point2D;

  fn p(x: f32, y: f32) -> Point2D<f32> {
    Point2D::new(x, y)
  }

  #[test] fn crossing_diagonals() {
    assert!(segments_intersect(p(0., 0.), p(10., 10.), p(0., 10.), p(10., 0.)));
  }

  #[test] fn parallel_horizontals() {
    assert!(!segments_intersect(p(0., 0.), p(10., 0.), p(0., 5.), p(10., 5.)));
  }

  #[test] fn collinear_overlap_and_gap() {
    assert!(segments_intersect(p(0., 0.), p(10., 0.), p(6., 0.), p(20., 0.)));
    assert!(!segments_intersect(p(0., 0.), p(10., 0.), p(15., 0.), p(25., 0.)));
  }

  #[test] fn vertical_pair() {
    // same x, overlapping heights
    assert!(segments_intersect(p(5., 0.), p(5., 10.), p(5., 8.), p(5., 20.)));
    // same x, disjoint heights
    assert!(!segments_intersect(p(5., 0.), p(5., 10.), p(5., 15.), p(5., 20.)));
    // distinct x
    assert!(!segments_intersect(p(5., 0.), p(5., 10.), p(50., 0.), p(50., 10.)));
  }

  #[test] fn vertical_against_slanted() {
    assert!(segments_intersect(p(5., 0.), p(5., 10.), p(0., 0.), p(10., 10.)));
    assert!(!segments_intersect(p(5., 20.), p(5., 30.), p(0., 0.), p(10., 10.)));
  }

  #[test] fn intersection_outside_spans() {
    // the carrier lines cross at (5, 5), beyond both segments
    assert!(!segments_intersect(p(0., 0.), p(3., 3.), p(0., 10.), p(3., 7.)));
  }

  #[test] fn shared_endpoint_counts() {
    assert!(segments_intersect(p(0., 0.), p(10., 10.), p(10., 10.), p(20., 40.)));
  }

  #[test] fn symmetry() {
    let cases = [
      [p(0., 0.), p(10., 10.), p(0., 10.), p(10., 0.)],
      [p(0., 0.), p(10., 0.), p(0., 5.), p(10., 5.)],
      [p(5., 0.), p(5., 10.), p(0., 0.), p(10., 10.)],
      [p(5., 0.), p(5., 10.), p(5., 8.), p(5., 20.)],
      [p(0., 0.), p(3., 3.), p(0., 10.), p(3., 7.)],
    ];
    for [a, b, c, d] in cases {
      assert_eq!(
        segments_intersect(a, b, c, d),
        segments_intersect(c, d, a, b),
        "asymmetric on {:?}", [a, b, c, d]
      );
    }
  }

  #[test] fn shoelace_square() {
    let ring = [p(0., 0.), p(10., 0.), p(10., 10.), p(0., 10.)];
    assert_eq!(signed_area(&ring), 100.0);
    let reversed = [p(0., 10.), p(10., 10.), p(10., 0.), p(0., 0.)];
    assert_eq!(signed_area(&reversed), -100.0);
  }

  #[test] fn shoelace_degenerate() {
    let empty: Vec<Point2D<f32>> = vec![];
    assert_eq!(signed_area(&empty), 0.0);
    assert_eq!(signed_area(&[p(1., 1.), p(2., 2.)]), 0.0);
  }
}
