//! Point-in-polygon location, simplicity testing, and the exact
//! segment-intersection predicate both are built on.

use crate::number::ExactNumber;
use crate::orientation::{orientation, Orientation};
use crate::point::Point;
use crate::polygon::Polygon;

/// The result of locating a point against a polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
  Inside,
  Outside,
  OnBoundary,
}

impl PointLocation {
  pub fn is_inside(self) -> bool {
    matches!(self, PointLocation::Inside)
  }

  pub fn is_outside(self) -> bool {
    matches!(self, PointLocation::Outside)
  }

  pub fn is_on_boundary(self) -> bool {
    matches!(self, PointLocation::OnBoundary)
  }
}

/// Classify `point` against `polygon` by ray casting along `+x`, with an
/// up-front exact check for lying on an edge (collinear with, and between,
/// its endpoints) so boundary points are never misclassified by crossing
/// parity.
pub fn locate_point(polygon: &Polygon, point: &Point) -> PointLocation {
  for (a, b) in polygon.edges() {
    if point_on_segment(point, a, b) {
      return PointLocation::OnBoundary;
    }
  }

  let mut crossings = 0u64;
  for (a, b) in polygon.edges() {
    if ray_crosses_edge(point, a, b) {
      crossings += 1;
    }
  }
  if crossings % 2 == 1 {
    PointLocation::Inside
  } else {
    PointLocation::Outside
  }
}

/// Whether `p` lies on the closed segment `[a, b]`.
pub fn point_on_segment(p: &Point, a: &Point, b: &Point) -> bool {
  if orientation(a, b, p) != Orientation::CoLinear {
    return false;
  }
  within_bounding_box(p, a, b)
}

fn within_bounding_box(p: &Point, a: &Point, b: &Point) -> bool {
  let (min_x, max_x) = order(&a.x, &b.x);
  let (min_y, max_y) = order(&a.y, &b.y);
  p.x >= *min_x && p.x <= *max_x && p.y >= *min_y && p.y <= *max_y
}

fn order<'a>(a: &'a ExactNumber, b: &'a ExactNumber) -> (&'a ExactNumber, &'a ExactNumber) {
  if a <= b {
    (a, b)
  } else {
    (b, a)
  }
}

/// The standard half-open ray-casting crossing test: edge `(a, b)` crosses
/// the `+x` ray from `point` iff exactly one endpoint is strictly above
/// `point.y` and the edge crosses the vertical line `x = point.x` to the
/// right of (or at) `point.x`. The half-open `y`-comparisons avoid
/// double-counting a ray that passes exactly through a shared vertex.
fn ray_crosses_edge(point: &Point, a: &Point, b: &Point) -> bool {
  let a_above = a.y > point.y;
  let b_above = b.y > point.y;
  if a_above == b_above {
    return false;
  }
  let t_num = &point.y - &a.y;
  let t_den = &b.y - &a.y;
  let x_at_y = &a.x + &(&(&t_num * &(&b.x - &a.x)) / &t_den);
  x_at_y > point.x
}

/// Whether the closed segments `[a, b]` and `[c, d]` intersect at all
/// (proper crossing, touching endpoint, or collinear overlap).
pub fn segments_intersect(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
  let o1 = orientation(a, b, c);
  let o2 = orientation(a, b, d);
  let o3 = orientation(c, d, a);
  let o4 = orientation(c, d, b);

  if o1 != o2 && o3 != o4 {
    return true;
  }
  if o1 == Orientation::CoLinear && within_bounding_box(c, a, b) {
    return true;
  }
  if o2 == Orientation::CoLinear && within_bounding_box(d, a, b) {
    return true;
  }
  if o3 == Orientation::CoLinear && within_bounding_box(a, c, d) {
    return true;
  }
  if o4 == Orientation::CoLinear && within_bounding_box(b, c, d) {
    return true;
  }
  false
}

/// A boundary is simple when non-adjacent edges never intersect and
/// adjacent edges meet only at their shared vertex.
pub fn polygon_is_simple(polygon: &Polygon) -> bool {
  let vertices = polygon.vertices();
  let n = vertices.len();
  if n < 3 {
    return false;
  }
  for i in 0..n {
    let a1 = &vertices[i];
    let b1 = &vertices[(i + 1) % n];
    for j in (i + 1)..n {
      let a2 = &vertices[j];
      let b2 = &vertices[(j + 1) % n];
      let adjacent = j == i + 1 || (i == 0 && j == n - 1);
      if adjacent {
        // Adjacent edges share exactly one endpoint; anything beyond that
        // (the shared vertex repeated, or backtracking onto the same line)
        // makes the boundary non-simple.
        if edges_overlap_beyond_shared_vertex(a1, b1, a2, b2) {
          return false;
        }
        continue;
      }
      if segments_intersect(a1, b1, a2, b2) {
        return false;
      }
    }
  }
  true
}

fn edges_overlap_beyond_shared_vertex(a1: &Point, b1: &Point, a2: &Point, b2: &Point) -> bool {
  if orientation(a1, b1, a2) != Orientation::CoLinear || orientation(a1, b1, b2) != Orientation::CoLinear {
    return false;
  }
  // Both edges lie on the same line; they must meet only at the single
  // vertex they share (b1 == a2 by construction of the adjacency walk).
  let shared = b1;
  let other_end_1 = a1;
  let other_end_2 = b2;
  point_on_segment(other_end_1, shared, other_end_2) || point_on_segment(other_end_2, shared, other_end_1)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::polygon::Polygon;

  fn pt(x: i64, y: i64) -> Point {
    Point::new(ExactNumber::from_i64(x), ExactNumber::from_i64(y))
  }

  fn square() -> Polygon {
    Polygon::new(vec![pt(0, 0), pt(4, 0), pt(4, 4), pt(0, 4)])
  }

  #[test]
  fn locates_interior_point() {
    assert_eq!(locate_point(&square(), &pt(2, 2)), PointLocation::Inside);
  }

  #[test]
  fn locates_exterior_point() {
    assert_eq!(locate_point(&square(), &pt(10, 10)), PointLocation::Outside);
  }

  #[test]
  fn locates_boundary_vertex() {
    assert_eq!(locate_point(&square(), &pt(0, 0)), PointLocation::OnBoundary);
  }

  #[test]
  fn locates_boundary_edge_midpoint() {
    assert_eq!(locate_point(&square(), &pt(2, 0)), PointLocation::OnBoundary);
  }

  #[test]
  fn simple_square_is_simple() {
    assert!(polygon_is_simple(&square()));
  }

  #[test]
  fn self_intersecting_bowtie_is_not_simple() {
    let bowtie = Polygon::new(vec![pt(0, 0), pt(4, 4), pt(4, 0), pt(0, 4)]);
    assert!(!polygon_is_simple(&bowtie));
  }

  #[test]
  fn crossing_segments_detected() {
    assert!(segments_intersect(&pt(0, 0), &pt(4, 4), &pt(0, 4), &pt(4, 0)));
  }

  #[test]
  fn parallel_segments_do_not_intersect() {
    assert!(!segments_intersect(&pt(0, 0), &pt(4, 0), &pt(0, 1), &pt(4, 1)));
  }

  #[test]
  fn collinear_overlap_detected() {
    assert!(segments_intersect(&pt(0, 0), &pt(4, 0), &pt(2, 0), &pt(6, 0)));
  }
}
