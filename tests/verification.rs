use polycover::number::ExactNumber;
use polycover::point::Point;
use polycover::polygon::{Polygon, PolygonWithHoles};
use polycover::verifier::{verify, VerificationResult};

fn pt(x: i64, y: i64) -> Point {
  Point::new(ExactNumber::from_i64(x), ExactNumber::from_i64(y))
}

fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Polygon {
  Polygon::new(vec![pt(x0, y0), pt(x1, y0), pt(x1, y1), pt(x0, y1)])
}

#[test]
fn four_way_tiling_covers_instance_exactly() {
  let instance = PolygonWithHoles::new(square(0, 0, 4, 4), vec![]).unwrap();
  let polygons = vec![square(0, 0, 2, 2), square(2, 0, 4, 2), square(0, 2, 2, 4), square(2, 2, 4, 4)];
  assert_eq!(verify(&instance, &polygons), VerificationResult::Valid);
}

#[test]
fn instance_with_hole_requires_cover_to_avoid_it() {
  let hole = Polygon::new(vec![pt(1, 1), pt(1, 2), pt(2, 2), pt(2, 1)]);
  let instance = PolygonWithHoles::new(square(0, 0, 4, 4), vec![hole]).unwrap();

  // A naive whole-square cover overshoots into the hole and must fail.
  let bad = vec![square(0, 0, 4, 4)];
  assert!(!verify(&instance, &bad).is_valid());
}

#[test]
fn cover_that_respects_the_hole_is_valid() {
  let hole = Polygon::new(vec![pt(1, 1), pt(1, 2), pt(2, 2), pt(2, 1)]);
  let instance = PolygonWithHoles::new(square(0, 0, 4, 4), vec![hole]).unwrap();

  // Cover built from rectangles around the hole at (1,1)-(2,2): strips
  // along all four sides plus the sliver directly above the hole.
  let polygons = vec![
    square(0, 0, 4, 1), // bottom strip
    square(0, 3, 4, 4), // top strip
    square(0, 1, 1, 3), // left strip
    square(2, 1, 4, 3), // right strip
    square(1, 2, 2, 3), // sliver above the hole
  ];
  assert_eq!(verify(&instance, &polygons), VerificationResult::Valid);
}

#[test]
fn overlapping_cover_is_valid_when_it_still_covers_everything() {
  let instance = PolygonWithHoles::new(square(0, 0, 4, 4), vec![]).unwrap();
  // Two halves that overlap in the middle column but still cover the
  // whole instance between them.
  let polygons = vec![square(0, 0, 3, 4), square(1, 0, 4, 4)];
  assert_eq!(verify(&instance, &polygons), VerificationResult::Valid);
}

#[test]
fn overlapping_cover_with_a_real_gap_is_rejected() {
  let instance = PolygonWithHoles::new(square(0, 0, 4, 4), vec![]).unwrap();
  // These overlap near x=2 but both stop short of x=4, leaving a gap that
  // a naive area-sum comparison could accidentally mask against the
  // double-counted overlap.
  let polygons = vec![square(0, 0, 2, 4), square(1, 0, 3, 4)];
  let result = verify(&instance, &polygons);
  match result {
    VerificationResult::Invalid(message) => assert!(message.contains("leaves uncovered")),
    VerificationResult::Valid => panic!("expected the gap past x=3 to be rejected"),
  }
}

#[test]
fn rational_coordinates_are_handled_exactly() {
  let half = ExactNumber::from_ratio_str("1/2").unwrap();
  let two = ExactNumber::from_i64(2);
  let outer = Polygon::new(vec![
    Point::new(ExactNumber::zero(), ExactNumber::zero()),
    Point::new(two.clone(), ExactNumber::zero()),
    Point::new(two.clone(), two.clone()),
    Point::new(ExactNumber::zero(), two.clone()),
  ]);
  let instance = PolygonWithHoles::new(outer, vec![]).unwrap();
  let left = Polygon::new(vec![
    Point::new(ExactNumber::zero(), ExactNumber::zero()),
    Point::new(half.clone(), ExactNumber::zero()),
    Point::new(half.clone(), two.clone()),
    Point::new(ExactNumber::zero(), two.clone()),
  ]);
  let right = Polygon::new(vec![
    Point::new(half.clone(), ExactNumber::zero()),
    Point::new(two.clone(), ExactNumber::zero()),
    Point::new(two.clone(), two.clone()),
    Point::new(half, two),
  ]);
  assert_eq!(verify(&instance, &[left, right]), VerificationResult::Valid);
}
