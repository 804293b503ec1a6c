//! The top-level verification pipeline: given an instance region and a
//! proposed convex cover, decide whether the cover is a valid minimum
//! convex cover solution and report the first violated check.
//!
//! The pipeline runs in a fixed order and stops at the first failure, each
//! emitting one of a small set of stable diagnostic strings so tooling that
//! consumes verifier output can match on them.

use crate::boolean::{self, Region};
use crate::polygon::{Polygon, PolygonWithHoles};

/// The result of verifying one solution against one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
  Valid,
  Invalid(String),
}

impl VerificationResult {
  pub fn is_valid(&self) -> bool {
    matches!(self, VerificationResult::Valid)
  }

  pub fn message(&self) -> Option<&str> {
    match self {
      VerificationResult::Valid => None,
      VerificationResult::Invalid(msg) => Some(msg),
    }
  }
}

/// Validate that `instance` itself is a well-formed polygonal domain. Most
/// of this work already happens in [`PolygonWithHoles::new`]; this wrapper
/// exists so the CLI and the archive scanner have a single entry point that
/// returns a `VerificationResult` instead of a `Result`.
pub fn verify_instance(outer: Polygon, holes: Vec<Polygon>) -> VerificationResult {
  match PolygonWithHoles::new(outer, holes) {
    Ok(_) => VerificationResult::Valid,
    Err(err) => VerificationResult::Invalid(err.to_string()),
  }
}

/// Verify that `polygons` forms a valid minimum convex cover of `instance`:
/// every polygon is a valid, non-degenerate convex polygon, every polygon is
/// contained in the instance region, and together they cover the instance's
/// entire area. Overlaps between solution polygons are permitted — the
/// problem is a cover, not a partition — so containment and coverage are
/// both decided by exact Boolean set operations rather than by area
/// arithmetic, which would be fooled by double-counted overlap.
pub fn verify(instance: &PolygonWithHoles, polygons: &[Polygon]) -> VerificationResult {
  if polygons.is_empty() {
    return VerificationResult::Invalid("polygons have empty union".to_string());
  }

  for polygon in polygons {
    if polygon.len() < 3 || polygon.area().is_zero() {
      return VerificationResult::Invalid("solution contains polygons of zero size".to_string());
    }
    if !polygon.is_simple() {
      return VerificationResult::Invalid("solution contains non-simple polygon".to_string());
    }
    if !polygon.is_convex() {
      return VerificationResult::Invalid("solution contains non-convex polygon".to_string());
    }
    if polygon.winding() != crate::orientation::Orientation::CounterClockWise {
      return VerificationResult::Invalid("solution polygon has wrong orientation".to_string());
    }
  }

  let instance_region = Region::from_polygon_with_holes(instance);

  for polygon in polygons {
    let polygon_region = Region::from_ring(polygon.clone());
    if !boolean::difference(&polygon_region, &instance_region).is_empty() {
      return VerificationResult::Invalid("solution polygon leaves the instance boundary".to_string());
    }
  }

  let solution_union = polygons
    .iter()
    .fold(Region::empty(), |acc, polygon| boolean::union(&acc, &Region::from_ring(polygon.clone())));

  let uncovered = boolean::difference(&instance_region, &solution_union);
  if !uncovered.is_empty() {
    return VerificationResult::Invalid(format!(
      "the union of the polygons leaves uncovered {} of the instance",
      uncovered.area()
    ));
  }

  VerificationResult::Valid
}

/// A lower-level entry point matching the name in the Boolean-ops module:
/// compute whether two already-built [`Region`]s describe the same area.
pub fn regions_equal(a: &Region, b: &Region) -> bool {
  boolean::equals(a, b)
}
