//! Concrete 2D exact point, specialised down to the two dimensions every
//! operation in this crate actually needs.

use std::fmt;

use crate::number::ExactNumber;

/// A point in the exact rational plane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
  pub x: ExactNumber,
  pub y: ExactNumber,
}

impl Point {
  pub fn new(x: ExactNumber, y: ExactNumber) -> Point {
    Point { x, y }
  }

  /// Squared Euclidean distance to `other`, kept as a rational rather than
  /// taking a square root (which is generally irrational).
  pub fn distance_sq(&self, other: &Point) -> ExactNumber {
    let dx = &self.x - &other.x;
    let dy = &self.y - &other.y;
    &dx * &dx + &dy * &dy
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn distance_sq_is_exact() {
    let a = Point::new(ExactNumber::from_i64(0), ExactNumber::from_i64(0));
    let b = Point::new(ExactNumber::from_i64(3), ExactNumber::from_i64(4));
    assert_eq!(a.distance_sq(&b), ExactNumber::from_i64(25));
  }
}
