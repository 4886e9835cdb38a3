use criterion::{criterion_group, criterion_main, Criterion};
use geocodec::io::wkt::{parse_wkt, to_wkt};

/// A LineString with 10,000 vertices.
fn line_string_wkt() -> String {
    let coords = (0..10_000)
        .map(|i| format!("{} {}", f64::from(i) * 0.001, (f64::from(i) * 0.01).sin()))
        .collect::<Vec<_>>()
        .join(",");
    format!("LINESTRING({coords})")
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let text = line_string_wkt();
    let geom = parse_wkt(&text).unwrap();

    c.bench_function("parse LineString WKT", |b| {
        b.iter(|| parse_wkt(&text).unwrap())
    });
    c.bench_function("write LineString WKT", |b| b.iter(|| to_wkt(&geom)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
