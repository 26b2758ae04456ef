use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seidel_triangulate::{triangulate, Polygon, PolygonalArea, TriangulationConfig, Vertex};

fn poly_size() -> usize {
    std::env::var("POLY_SIZE").unwrap_or("2000".to_string()).parse().unwrap()
}

criterion_group!(benches, trapezoidation, full_triangulation);
criterion_main!(benches);

/// A simple (non-self-intersecting) star-shaped polygon with `n` vertices,
/// alternating between two radii so the boundary isn't convex.
fn star_polygon(n: usize) -> PolygonalArea {
    let mut vertices = Vec::with_capacity(n);
    for i in 0..n {
        let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
        let radius = if i % 2 == 0 { 10.0 } else { 6.0 };
        vertices.push(Vertex::new(radius * angle.cos(), radius * angle.sin()));
    }
    PolygonalArea::new(vec![Polygon::new(vertices)])
}

fn trapezoidation(c: &mut Criterion) {
    let n = poly_size();
    println!("POLY_SIZE: {n}");
    let area = star_polygon(n);
    let config = TriangulationConfig { rng_seed: Some(1), ..Default::default() };
    c.bench_function("trapezoidation/star_polygon", |b| {
        b.iter(|| {
            let result = seidel_triangulate::algorithm::trapezoidate(black_box(&area), black_box(&config));
            black_box(result.unwrap());
        })
    });
}

fn full_triangulation(c: &mut Criterion) {
    let n = poly_size();
    let area = star_polygon(n);
    let config = TriangulationConfig { rng_seed: Some(1), ..Default::default() };
    c.bench_function("triangulate/star_polygon", |b| {
        b.iter(|| {
            let triangles = triangulate(black_box(&area), black_box(&config));
            black_box(triangles.unwrap());
        })
    });
}
