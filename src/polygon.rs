//! `Polygon` (a single closed boundary) and `PolygonWithHoles` (a region of
//! the plane bounded by one outer ring and zero or more hole rings).

use crate::error::InstanceError;
use crate::number::ExactNumber;
use crate::orientation::{orientation, Orientation};
use crate::point::Point;

/// A closed polygonal boundary, stored as its ordered vertex sequence. The
/// implicit closing edge runs from the last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
  vertices: Vec<Point>,
}

impl Polygon {
  pub fn new(vertices: Vec<Point>) -> Polygon {
    Polygon { vertices }
  }

  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// The boundary's edges as `(tail, head)` pairs, wrapping from the last
  /// vertex back to the first.
  pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> {
    let n = self.vertices.len();
    (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
  }

  /// Twice the signed area (shoelace formula), positive for a
  /// counter-clockwise boundary and negative for a clockwise one. Kept
  /// doubled and exact so no division by two that could introduce a
  /// half-integer is ever needed just to test the sign.
  pub fn signed_area_2x(&self) -> ExactNumber {
    let n = self.vertices.len();
    let mut total = ExactNumber::zero();
    for i in 0..n {
      let p = &self.vertices[i];
      let q = &self.vertices[(i + 1) % n];
      total = total + (&p.x * &q.y - &q.x * &p.y);
    }
    total
  }

  pub fn area(&self) -> ExactNumber {
    self.signed_area_2x().abs().checked_div(&ExactNumber::from_i64(2)).expect("2 != 0")
  }

  /// The orientation a non-degenerate boundary has as a whole: CCW if its
  /// signed area is positive, CW if negative. `CoLinear` signals a
  /// zero-area (degenerate) boundary.
  pub fn winding(&self) -> Orientation {
    let area = self.signed_area_2x();
    if area.is_positive() {
      Orientation::CounterClockWise
    } else if area.is_negative() {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// A boundary is simple when no two non-adjacent edges intersect and no
  /// two adjacent edges overlap beyond their shared endpoint.
  pub fn is_simple(&self) -> bool {
    crate::predicates::polygon_is_simple(self)
  }

  /// A boundary is convex when every vertex turns the same way (or is
  /// collinear with its neighbours), with at least one strict turn.
  pub fn is_convex(&self) -> bool {
    let n = self.vertices.len();
    if n < 3 {
      return false;
    }
    let mut seen_ccw = false;
    let mut seen_cw = false;
    for i in 0..n {
      let p = &self.vertices[i];
      let q = &self.vertices[(i + 1) % n];
      let r = &self.vertices[(i + 2) % n];
      match orientation(p, q, r) {
        Orientation::CounterClockWise => seen_ccw = true,
        Orientation::ClockWise => seen_cw = true,
        Orientation::CoLinear => {}
      }
      if seen_ccw && seen_cw {
        return false;
      }
    }
    seen_ccw != seen_cw
  }
}

/// A region of the plane: one outer boundary (oriented CCW, positive area)
/// with zero or more interior holes (each oriented CW, negative area),
/// mutually interior-disjoint and each nested strictly inside the outer
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonWithHoles {
  outer: Polygon,
  holes: Vec<Polygon>,
}

impl PolygonWithHoles {
  /// Build a region from a raw outer boundary and hole set, validating the
  /// invariants in §4.2: minimum vertex counts, simplicity, orientation,
  /// hole containment, and pairwise hole disjointness.
  pub fn new(outer: Polygon, holes: Vec<Polygon>) -> Result<PolygonWithHoles, InstanceError> {
    validate_ring(&outer, "outer boundary", Orientation::CounterClockWise)?;
    for hole in &holes {
      validate_ring(hole, "hole", Orientation::ClockWise)?;
    }
    for (i, hole) in holes.iter().enumerate() {
      if !hole_inside_boundary(hole, &outer) {
        return Err(InstanceError::HoleOutsideBoundary(i));
      }
    }
    for i in 0..holes.len() {
      for j in (i + 1)..holes.len() {
        if !crate::boolean::rings_interior_disjoint(&holes[i], &holes[j]) {
          return Err(InstanceError::OverlappingHoles(i, j));
        }
      }
    }
    Ok(PolygonWithHoles { outer, holes })
  }

  pub fn outer(&self) -> &Polygon {
    &self.outer
  }

  pub fn holes(&self) -> &[Polygon] {
    &self.holes
  }

  /// Net area: the outer boundary's area minus every hole's area.
  pub fn area(&self) -> ExactNumber {
    let mut total = self.outer.area();
    for hole in &self.holes {
      total = total - hole.area();
    }
    total
  }
}

fn validate_ring(ring: &Polygon, label: &'static str, expected: Orientation) -> Result<(), InstanceError> {
  if ring.len() < 3 {
    return Err(InstanceError::InsufficientVertices(label));
  }
  if !ring.is_simple() {
    return Err(InstanceError::NotSimple(label));
  }
  if ring.winding() != expected {
    return Err(InstanceError::WrongOrientation(label));
  }
  Ok(())
}

fn hole_inside_boundary(hole: &Polygon, outer: &Polygon) -> bool {
  hole
    .vertices()
    .iter()
    .all(|v| crate::predicates::locate_point(outer, v).is_inside())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pt(x: i64, y: i64) -> Point {
    Point::new(ExactNumber::from_i64(x), ExactNumber::from_i64(y))
  }

  fn unit_square_ccw() -> Polygon {
    Polygon::new(vec![pt(0, 0), pt(4, 0), pt(4, 4), pt(0, 4)])
  }

  #[test]
  fn area_of_unit_square() {
    let square = unit_square_ccw();
    assert_eq!(square.area(), ExactNumber::from_i64(16));
    assert_eq!(square.winding(), Orientation::CounterClockWise);
  }

  #[test]
  fn convex_square_is_convex() {
    assert!(unit_square_ccw().is_convex());
  }

  #[test]
  fn notch_is_not_convex() {
    let notched = Polygon::new(vec![pt(0, 0), pt(4, 0), pt(4, 4), pt(2, 2), pt(0, 4)]);
    assert!(!notched.is_convex());
  }

  #[test]
  fn hole_must_be_interior() {
    let outer = unit_square_ccw();
    let hole = Polygon::new(vec![pt(10, 10), pt(11, 10), pt(11, 11), pt(10, 11)]);
    let err = PolygonWithHoles::new(outer, vec![hole]).unwrap_err();
    assert_eq!(err, InstanceError::HoleOutsideBoundary(0));
  }

  #[test]
  fn hole_must_be_clockwise() {
    let outer = unit_square_ccw();
    let hole = Polygon::new(vec![pt(1, 1), pt(2, 1), pt(2, 2), pt(1, 2)]);
    let err = PolygonWithHoles::new(outer, vec![hole]).unwrap_err();
    assert_eq!(err, InstanceError::WrongOrientation("hole"));
  }

  #[test]
  fn valid_region_with_hole() {
    let outer = unit_square_ccw();
    let hole = Polygon::new(vec![pt(1, 1), pt(1, 2), pt(2, 2), pt(2, 1)]);
    let region = claims::assert_ok!(PolygonWithHoles::new(outer, vec![hole]));
    assert_eq!(region.area(), ExactNumber::from_i64(15));
  }

  #[test]
  fn degenerate_boundary_is_rejected() {
    let degenerate = Polygon::new(vec![pt(0, 0), pt(1, 0)]);
    claims::assert_err!(PolygonWithHoles::new(degenerate, vec![]));
  }
}
