use criterion::{black_box, criterion_group, criterion_main, Criterion};

use polycover::number::ExactNumber;
use polycover::point::Point;
use polycover::{orientation, Orientation};

fn pt(x: i64, y: i64) -> Point {
  Point::new(ExactNumber::from_i64(x), ExactNumber::from_i64(y))
}

fn bench_orientation(c: &mut Criterion) {
  let p = pt(0, 0);
  let q = pt(1_000_000, 3);
  let r = pt(-7, 1_000_003);
  c.bench_function("orientation/small_coordinates", |b| {
    b.iter(|| {
      let result: Orientation = orientation(black_box(&p), black_box(&q), black_box(&r));
      black_box(result)
    })
  });
}

fn bench_orientation_large_rationals(c: &mut Criterion) {
  let p = Point::new(
    ExactNumber::from_ratio_str("123456789012345678901234567890/7").unwrap(),
    ExactNumber::from_ratio_str("98765432109876543210987654321/11").unwrap(),
  );
  let q = pt(1, 1);
  let r = pt(-1, 2);
  c.bench_function("orientation/large_rationals", |b| {
    b.iter(|| black_box(orientation(black_box(&p), black_box(&q), black_box(&r))))
  });
}

criterion_group!(benches, bench_orientation, bench_orientation_large_rationals);
criterion_main!(benches);
