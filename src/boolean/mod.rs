//! Exact Boolean set operations over regions bounded by simple polygons.
//!
//! A [`Region`] is a flat bag of oriented rings (outer boundaries CCW,
//! holes CW) — the same convention [`crate::polygon::PolygonWithHoles`]
//! uses, generalised to possibly many source polygons. `union`,
//! `intersection`, and `difference` reassemble the kept boundary of the
//! [`arrangement`] into fresh rings; `area`, `is_empty`, and `equals` are
//! then simple derived queries.

mod arrangement;

use std::collections::HashMap;

use crate::number::ExactNumber;
use crate::orientation::Orientation;
use crate::point::Point;
use crate::polygon::{Polygon, PolygonWithHoles};
use crate::predicates::{locate_point, segments_intersect};

/// A set of oriented rings, outer boundaries CCW and holes CW, possibly
/// drawn from more than one source polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
  rings: Vec<Polygon>,
}

impl Region {
  pub fn empty() -> Region {
    Region { rings: Vec::new() }
  }

  /// A region bounded by a single already-oriented, already-validated ring
  /// with no holes (the shape of one solution polygon).
  pub fn from_ring(ring: Polygon) -> Region {
    Region { rings: vec![ring] }
  }

  pub fn from_polygon_with_holes(region: &PolygonWithHoles) -> Region {
    let mut rings = vec![region.outer().clone()];
    rings.extend(region.holes().iter().cloned());
    Region { rings }
  }

  /// Flatten several (assumed pairwise interior-disjoint) regions into one.
  pub fn from_polygons_with_holes(regions: &[PolygonWithHoles]) -> Region {
    let mut rings = Vec::new();
    for region in regions {
      rings.push(region.outer().clone());
      rings.extend(region.holes().iter().cloned());
    }
    Region { rings }
  }

  pub fn rings(&self) -> &[Polygon] {
    &self.rings
  }

  pub fn is_empty(&self) -> bool {
    self.rings.is_empty() || self.area().is_zero()
  }

  /// Sum of signed ring areas. Exact when the rings are pairwise interior
  /// disjoint (the only case this module's callers rely on); otherwise it
  /// is a signed total, not a geometric union area.
  pub fn area(&self) -> ExactNumber {
    self.rings.iter().fold(ExactNumber::zero(), |acc, ring| acc + signed_area(ring))
  }
}

fn signed_area(ring: &Polygon) -> ExactNumber {
  match ring.winding() {
    Orientation::CounterClockWise => ring.area(),
    Orientation::ClockWise => -ring.area(),
    Orientation::CoLinear => ExactNumber::zero(),
  }
}

/// Whether two simple rings' interiors overlap. Touching along a shared
/// edge or vertex is allowed (returns `true` meaning "disjoint") — only a
/// positive-area overlap counts as a violation.
pub fn rings_interior_disjoint(a: &Polygon, b: &Polygon) -> bool {
  for (p1, q1) in a.edges() {
    for (p2, q2) in b.edges() {
      if properly_crosses(p1, q1, p2, q2) {
        return false;
      }
    }
  }
  for v in a.vertices() {
    if locate_point(b, v).is_inside() {
      return false;
    }
  }
  for v in b.vertices() {
    if locate_point(a, v).is_inside() {
      return false;
    }
  }
  true
}

/// A crossing that is not merely two edges touching at a shared endpoint
/// or running collinear along shared boundary — only a genuine transversal
/// crossing indicates the two rings' interiors overlap.
fn properly_crosses(p1: &Point, q1: &Point, p2: &Point, q2: &Point) -> bool {
  if !segments_intersect(p1, q1, p2, q2) {
    return false;
  }
  is_transversal(p1, q1, p2, q2)
}

fn is_transversal(p1: &Point, q1: &Point, p2: &Point, q2: &Point) -> bool {
  use crate::orientation::orientation;
  let o1 = orientation(p2, q2, p1);
  let o2 = orientation(p2, q2, q1);
  let o3 = orientation(p1, q1, p2);
  let o4 = orientation(p1, q1, q2);
  o1 != o2 && o3 != o4 && o1 != Orientation::CoLinear && o2 != Orientation::CoLinear
}

/// Which side of a fragment each operation keeps.
fn keep(op: SetOp, in_a: bool, in_b: bool) -> bool {
  match op {
    SetOp::Union => in_a || in_b,
    SetOp::Intersection => in_a && in_b,
    SetOp::Difference => in_a && !in_b,
  }
}

#[derive(Debug, Clone, Copy)]
enum SetOp {
  Union,
  Intersection,
  Difference,
}

pub fn union(a: &Region, b: &Region) -> Region {
  apply(SetOp::Union, a, b)
}

pub fn intersection(a: &Region, b: &Region) -> Region {
  apply(SetOp::Intersection, a, b)
}

pub fn difference(a: &Region, b: &Region) -> Region {
  apply(SetOp::Difference, a, b)
}

/// Two regions cover exactly the same area, tested by symmetric difference
/// rather than boundary comparison (robust to different but equivalent ring
/// decompositions of the same shape).
pub fn equals(a: &Region, b: &Region) -> bool {
  difference(a, b).is_empty() && difference(b, a).is_empty()
}

fn apply(op: SetOp, a: &Region, b: &Region) -> Region {
  let fragments = arrangement::build_fragments(&a.rings, &b.rings);
  let mut directed_edges: Vec<(Point, Point)> = Vec::new();

  for fragment in &fragments {
    let left_keep = keep(op, fragment.in_a_left, fragment.in_b_left);
    let right_keep = keep(op, fragment.in_a_right, fragment.in_b_right);
    if left_keep == right_keep {
      continue;
    }
    if left_keep {
      directed_edges.push((fragment.p.clone(), fragment.q.clone()));
    } else {
      directed_edges.push((fragment.q.clone(), fragment.p.clone()));
    }
  }

  Region { rings: assemble_loops(directed_edges) }
}

/// Reassemble a set of directed edges (each appearing at most once per
/// direction, interior-on-the-left) into closed simple rings by following
/// each point's single outgoing edge.
fn assemble_loops(edges: Vec<(Point, Point)>) -> Vec<Polygon> {
  let mut outgoing: HashMap<PointKey, Vec<Point>> = HashMap::new();
  for (p, q) in &edges {
    outgoing.entry(PointKey::from(p)).or_default().push(q.clone());
  }

  let mut visited: HashMap<(PointKey, PointKey), bool> = HashMap::new();
  for (p, q) in &edges {
    visited.insert((PointKey::from(p), PointKey::from(q)), false);
  }

  let mut rings = Vec::new();
  for (p, q) in &edges {
    let start_key = (PointKey::from(p), PointKey::from(q));
    if visited[&start_key] {
      continue;
    }
    let mut loop_points = vec![p.clone()];
    let mut current = q.clone();
    visited.insert(start_key.clone(), true);
    loop {
      loop_points.push(current.clone());
      if PointKey::from(&current) == start_key.0 {
        break;
      }
      let next = match outgoing.get_mut(&PointKey::from(&current)).and_then(|v| v.pop()) {
        Some(next) => next,
        None => break,
      };
      visited.insert((PointKey::from(&current), PointKey::from(&next)), true);
      current = next;
    }
    loop_points.pop();
    if loop_points.len() >= 3 {
      rings.push(Polygon::new(loop_points));
    }
  }
  rings
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PointKey(ExactNumber, ExactNumber);

impl From<&Point> for PointKey {
  fn from(p: &Point) -> PointKey {
    PointKey(p.x.clone(), p.y.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::number::ExactNumber;

  fn pt(x: i64, y: i64) -> Point {
    Point::new(ExactNumber::from_i64(x), ExactNumber::from_i64(y))
  }

  fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> PolygonWithHoles {
    let outer = Polygon::new(vec![pt(x0, y0), pt(x1, y0), pt(x1, y1), pt(x0, y1)]);
    PolygonWithHoles::new(outer, vec![]).unwrap()
  }

  #[test]
  fn union_of_disjoint_squares_sums_area() {
    let a = Region::from_polygon_with_holes(&square(0, 0, 1, 1));
    let b = Region::from_polygon_with_holes(&square(5, 5, 6, 6));
    let u = union(&a, &b);
    assert_eq!(u.area(), ExactNumber::from_i64(2));
  }

  #[test]
  fn intersection_of_disjoint_squares_is_empty() {
    let a = Region::from_polygon_with_holes(&square(0, 0, 1, 1));
    let b = Region::from_polygon_with_holes(&square(5, 5, 6, 6));
    assert!(intersection(&a, &b).is_empty());
  }

  #[test]
  fn intersection_of_overlapping_squares() {
    let a = Region::from_polygon_with_holes(&square(0, 0, 2, 2));
    let b = Region::from_polygon_with_holes(&square(1, 1, 3, 3));
    let i = intersection(&a, &b);
    assert_eq!(i.area(), ExactNumber::from_i64(1));
  }

  #[test]
  fn difference_removes_overlap() {
    let a = Region::from_polygon_with_holes(&square(0, 0, 2, 2));
    let b = Region::from_polygon_with_holes(&square(1, 1, 3, 3));
    let d = difference(&a, &b);
    assert_eq!(d.area(), ExactNumber::from_i64(3));
  }

  #[test]
  fn equal_regions_are_equal() {
    let a = Region::from_polygon_with_holes(&square(0, 0, 2, 2));
    let b = Region::from_polygon_with_holes(&square(0, 0, 2, 2));
    assert!(equals(&a, &b));
  }

  #[test]
  fn adjacent_tiles_are_interior_disjoint() {
    let left = Polygon::new(vec![pt(0, 0), pt(1, 0), pt(1, 1), pt(0, 1)]);
    let right = Polygon::new(vec![pt(1, 0), pt(2, 0), pt(2, 1), pt(1, 1)]);
    assert!(rings_interior_disjoint(&left, &right));
  }

  #[test]
  fn overlapping_rings_are_not_interior_disjoint() {
    let a = Polygon::new(vec![pt(0, 0), pt(2, 0), pt(2, 2), pt(0, 2)]);
    let b = Polygon::new(vec![pt(1, 1), pt(3, 1), pt(3, 3), pt(1, 3)]);
    assert!(!rings_interior_disjoint(&a, &b));
  }

  #[test]
  fn union_of_adjacent_tiles_has_no_interior_seam() {
    let left = Region::from_polygon_with_holes(&square(0, 0, 1, 1));
    let right = Region::from_polygon_with_holes(&square(1, 0, 2, 1));
    let u = union(&left, &right);
    assert_eq!(u.area(), ExactNumber::from_i64(2));
    assert_eq!(u.rings().len(), 1);
  }
}
