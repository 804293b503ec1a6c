use criterion::{black_box, criterion_group, criterion_main, Criterion};

use polycover::boolean::{self, Region};
use polycover::number::ExactNumber;
use polycover::point::Point;
use polycover::polygon::{Polygon, PolygonWithHoles};

fn pt(x: i64, y: i64) -> Point {
  Point::new(ExactNumber::from_i64(x), ExactNumber::from_i64(y))
}

fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Region {
  let outer = Polygon::new(vec![pt(x0, y0), pt(x1, y0), pt(x1, y1), pt(x0, y1)]);
  Region::from_polygon_with_holes(&PolygonWithHoles::new(outer, vec![]).unwrap())
}

fn bench_union(c: &mut Criterion) {
  let a = square(0, 0, 10, 10);
  let b = square(5, 5, 15, 15);
  c.bench_function("boolean/union_overlapping_squares", |bench| {
    bench.iter(|| black_box(boolean::union(black_box(&a), black_box(&b))))
  });
}

fn bench_intersection(c: &mut Criterion) {
  let a = square(0, 0, 10, 10);
  let b = square(5, 5, 15, 15);
  c.bench_function("boolean/intersection_overlapping_squares", |bench| {
    bench.iter(|| black_box(boolean::intersection(black_box(&a), black_box(&b))))
  });
}

criterion_group!(benches, bench_union, bench_intersection);
criterion_main!(benches);
