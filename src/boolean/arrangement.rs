//! Exact planar arrangement used by `super::{union, intersection, difference}`.
//!
//! The two operand ring sets are cut against each other at every pairwise
//! intersection (proper crossings and collinear overlaps alike) into atomic
//! fragments. Each fragment is then classified by which operand(s) claim the
//! region immediately to its left and right, with no floating-point
//! perturbation anywhere: degenerate cases (a fragment that lies exactly on
//! top of an edge from the other operand, or from another ring of the same
//! operand) are resolved by comparing directions instead of nudging
//! coordinates. See `classify_fragment` for the tie-break policy.

use std::cmp::Ordering;

use crate::number::ExactNumber;
use crate::orientation::{orientation, Orientation};
use crate::point::Point;
use crate::polygon::Polygon;
use crate::predicates::locate_point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
  A,
  B,
}

/// One ring's edge, directed the way the ring was wound (interior to the
/// left, by the outer-CCW/hole-CW convention every `Polygon` here obeys).
#[derive(Debug, Clone)]
struct TaggedEdge {
  p: Point,
  q: Point,
  operand: Operand,
  ring: usize,
}

/// An atomic, non-subdivisible piece of the arrangement: a canonical
/// directed segment plus the membership of the region just to its left and
/// just to its right, for each operand.
#[derive(Debug, Clone)]
pub struct Fragment {
  pub p: Point,
  pub q: Point,
  pub in_a_left: bool,
  pub in_a_right: bool,
  pub in_b_left: bool,
  pub in_b_right: bool,
}

/// Build the full set of classified atomic fragments for two operand ring
/// sets. Each ring set is assumed internally consistent (outer rings CCW,
/// hole rings CW) but may share boundary with the other operand, or between
/// its own rings (e.g. a tiling of adjacent polygons).
pub fn build_fragments(rings_a: &[Polygon], rings_b: &[Polygon]) -> Vec<Fragment> {
  let mut edges = Vec::new();
  for (ring, polygon) in rings_a.iter().enumerate() {
    for (p, q) in polygon.edges() {
      edges.push(TaggedEdge { p: p.clone(), q: q.clone(), operand: Operand::A, ring });
    }
  }
  for (ring, polygon) in rings_b.iter().enumerate() {
    for (p, q) in polygon.edges() {
      edges.push(TaggedEdge { p: p.clone(), q: q.clone(), operand: Operand::B, ring });
    }
  }

  let atomic = split_into_atomic_segments(&edges);
  let groups = group_by_canonical_segment(atomic);

  groups
    .into_iter()
    .map(|group| classify_fragment(group, rings_a, rings_b))
    .collect()
}

/// One atomic (unsplit-further) directed segment inherited from a single
/// original edge.
struct AtomicSegment {
  p: Point,
  q: Point,
  operand: Operand,
  ring: usize,
}

fn split_into_atomic_segments(edges: &[TaggedEdge]) -> Vec<AtomicSegment> {
  let mut result = Vec::new();
  for (i, edge) in edges.iter().enumerate() {
    let mut breakpoints = vec![edge.p.clone(), edge.q.clone()];
    for (j, other) in edges.iter().enumerate() {
      if i == j {
        continue;
      }
      collect_breakpoints(edge, other, &mut breakpoints);
    }
    sort_along_edge(&edge.p, &edge.q, &mut breakpoints);
    breakpoints.dedup();
    for pair in breakpoints.windows(2) {
      result.push(AtomicSegment {
        p: pair[0].clone(),
        q: pair[1].clone(),
        operand: edge.operand,
        ring: edge.ring,
      });
    }
  }
  result
}

fn collect_breakpoints(edge: &TaggedEdge, other: &TaggedEdge, out: &mut Vec<Point>) {
  let (a, b) = (&edge.p, &edge.q);
  let (c, d) = (&other.p, &other.q);

  let o1 = orientation(a, b, c);
  let o2 = orientation(a, b, d);

  if o1 == Orientation::CoLinear && o2 == Orientation::CoLinear {
    // Collinear: any endpoint of `other` that falls within [a, b]'s span
    // becomes a breakpoint of `edge`.
    if point_within_segment_span(c, a, b) {
      out.push(c.clone());
    }
    if point_within_segment_span(d, a, b) {
      out.push(d.clone());
    }
    return;
  }

  if let Some(point) = proper_intersection_point(a, b, c, d) {
    out.push(point);
  }
}

fn point_within_segment_span(p: &Point, a: &Point, b: &Point) -> bool {
  if orientation(a, b, p) != Orientation::CoLinear {
    return false;
  }
  let (min_x, max_x) = minmax(&a.x, &b.x);
  let (min_y, max_y) = minmax(&a.y, &b.y);
  p.x >= *min_x && p.x <= *max_x && p.y >= *min_y && p.y <= *max_y
}

fn minmax<'a>(a: &'a ExactNumber, b: &'a ExactNumber) -> (&'a ExactNumber, &'a ExactNumber) {
  if a <= b {
    (a, b)
  } else {
    (b, a)
  }
}

/// The exact intersection point of segments `(a, b)` and `(c, d)`, if they
/// cross properly and are not collinear. Returns `None` when parallel or
/// when the computed point falls outside either segment's span.
fn proper_intersection_point(a: &Point, b: &Point, c: &Point, d: &Point) -> Option<Point> {
  let d1x = &b.x - &a.x;
  let d1y = &b.y - &a.y;
  let d2x = &d.x - &c.x;
  let d2y = &d.y - &c.y;
  let denom = &d1x * &d2y - &d1y * &d2x;
  if denom.is_zero() {
    return None;
  }
  let acx = &c.x - &a.x;
  let acy = &c.y - &a.y;
  let t = (&acx * &d2y - &acy * &d2x).checked_div(&denom).ok()?;
  if t < 0 || t > 1 {
    return None;
  }
  let ix = &a.x + &(&t * &d1x);
  let iy = &a.y + &(&t * &d1y);
  let point = Point::new(ix, iy);
  if !point_within_segment_span(&point, c, d) {
    return None;
  }
  Some(point)
}

fn sort_along_edge(start: &Point, _end: &Point, points: &mut [Point]) {
  points.sort_by(|p, q| {
    let dp = start.distance_sq(p);
    let dq = start.distance_sq(q);
    dp.partial_cmp(&dq).unwrap_or(Ordering::Equal)
  });
}

/// A maximal set of atomic segments that occupy exactly the same
/// undirected span, grouped with a canonical direction so their individual
/// directions can be compared against it.
struct CanonicalGroup {
  p: Point,
  q: Point,
  members: Vec<(Operand, usize, bool)>, // (operand, ring, matches_canonical_direction)
}

fn group_by_canonical_segment(segments: Vec<AtomicSegment>) -> Vec<CanonicalGroup> {
  let mut groups: Vec<CanonicalGroup> = Vec::new();
  for seg in segments {
    let (canon_p, canon_q, forward) = canonical_direction(&seg.p, &seg.q);
    if let Some(group) = groups.iter_mut().find(|g| g.p == canon_p && g.q == canon_q) {
      group.members.push((seg.operand, seg.ring, forward));
    } else {
      groups.push(CanonicalGroup { p: canon_p, q: canon_q, members: vec![(seg.operand, seg.ring, forward)] });
    }
  }
  groups
}

fn canonical_direction(p: &Point, q: &Point) -> (Point, Point, bool) {
  if point_key(p) <= point_key(q) {
    (p.clone(), q.clone(), true)
  } else {
    (q.clone(), p.clone(), false)
  }
}

fn point_key(p: &Point) -> (ExactNumber, ExactNumber) {
  (p.x.clone(), p.y.clone())
}

fn classify_fragment(group: CanonicalGroup, rings_a: &[Polygon], rings_b: &[Polygon]) -> Fragment {
  let coincident_a: Vec<(usize, bool)> =
    group.members.iter().filter(|(op, _, _)| *op == Operand::A).map(|(_, ring, fwd)| (*ring, *fwd)).collect();
  let coincident_b: Vec<(usize, bool)> =
    group.members.iter().filter(|(op, _, _)| *op == Operand::B).map(|(_, ring, fwd)| (*ring, *fwd)).collect();

  let midpoint = midpoint(&group.p, &group.q);

  let excluded_a: Vec<usize> = coincident_a.iter().map(|(r, _)| *r).collect();
  let excluded_b: Vec<usize> = coincident_b.iter().map(|(r, _)| *r).collect();

  let base_a = base_membership(&midpoint, rings_a, &excluded_a);
  let base_b = base_membership(&midpoint, rings_b, &excluded_b);

  let (coincident_a_left, coincident_a_right) = fold_coincident_sides(&coincident_a);
  let (coincident_b_left, coincident_b_right) = fold_coincident_sides(&coincident_b);

  Fragment {
    p: group.p,
    q: group.q,
    in_a_left: base_a || coincident_a_left,
    in_a_right: base_a || coincident_a_right,
    in_b_left: base_b || coincident_b_left,
    in_b_right: base_b || coincident_b_right,
  }
}

/// A ring traversed in the canonical direction has its interior on the
/// left; traversed in reverse, its interior is on the right.
fn fold_coincident_sides(coincident: &[(usize, bool)]) -> (bool, bool) {
  let mut left = false;
  let mut right = false;
  for (_, forward) in coincident {
    if *forward {
      left = true;
    } else {
      right = true;
    }
  }
  (left, right)
}

fn base_membership(point: &Point, rings: &[Polygon], excluded: &[usize]) -> bool {
  rings
    .iter()
    .enumerate()
    .filter(|(i, _)| !excluded.contains(i))
    .any(|(_, ring)| locate_point(ring, point).is_inside())
}

fn midpoint(p: &Point, q: &Point) -> Point {
  let two = ExactNumber::from_i64(2);
  let x = (&p.x + &q.x).checked_div(&two).expect("2 != 0");
  let y = (&p.y + &q.y).checked_div(&two).expect("2 != 0");
  Point::new(x, y)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::number::ExactNumber;

  fn pt(x: i64, y: i64) -> Point {
    Point::new(ExactNumber::from_i64(x), ExactNumber::from_i64(y))
  }

  fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Polygon {
    Polygon::new(vec![pt(x0, y0), pt(x1, y0), pt(x1, y1), pt(x0, y1)])
  }

  #[test]
  fn disjoint_squares_have_no_shared_fragments() {
    let a = square(0, 0, 1, 1);
    let b = square(5, 5, 6, 6);
    let fragments = build_fragments(&[a], &[b]);
    assert!(fragments.iter().all(|f| !(f.in_a_left && f.in_b_left)));
  }

  #[test]
  fn overlapping_squares_produce_intersection_fragment() {
    let a = square(0, 0, 2, 2);
    let b = square(1, 1, 3, 3);
    let fragments = build_fragments(&[a], &[b]);
    assert!(fragments.iter().any(|f| f.in_a_left && f.in_b_left));
    assert!(fragments.iter().any(|f| f.in_a_left && !f.in_b_left));
  }

  #[test]
  fn adjacent_tiles_glue_away_their_shared_edge() {
    let left = square(0, 0, 1, 1);
    let right = square(1, 0, 2, 1);
    let fragments = build_fragments(&[left, right], &[]);
    let shared = fragments.iter().find(|f| f.p == pt(1, 0) && f.q == pt(1, 1)).expect("shared edge present");
    assert!(shared.in_a_left);
    assert!(shared.in_a_right);
  }
}
