//! Randomized incremental triangulation of polygonal areas.
//!
//! Implements Seidel's algorithm: build a trapezoidal decomposition of the
//! plane induced by a polygon's edges via a randomized incremental search
//! DAG, classify trapezoids inside or outside by parity, extract the inside
//! region's monotone mountains, and triangulate each mountain by adaptive
//! ear-clipping.
//!
//! The entry point is [`triangulate`]; everything else is exposed for
//! callers who want to drive the pipeline stage by stage (e.g. to inspect
//! the trapezoidation itself).

pub mod algorithm;
pub mod config;
pub mod dag;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod trapezoid;

pub use config::TriangulationConfig;
pub use error::TriangulateError;
pub use geometry::{Edge, Polygon, PolygonalArea, Triangle, Vertex};

use algorithm::{extract_mountains, inside_trapezoids, trapezoidate, triangulate_mountain};

/// Triangulates `area` according to `config`.
///
/// Returns every triangle covering the area's interior (defined by the
/// odd-even rule across its polygons), each oriented counter-clockwise. The
/// partition itself is randomized (see [`TriangulationConfig::rng_seed`]);
/// the covered region is not.
pub fn triangulate(area: &PolygonalArea, config: &TriangulationConfig) -> Result<Vec<Triangle>, TriangulateError> {
    let dag = trapezoidate(area, config)?;
    let inside = inside_trapezoids(&dag)?;
    log::debug!("{} of {} trapezoids are inside", inside.len(), dag.leaves().len());

    let mountains = extract_mountains(&dag, &inside)?;
    log::debug!("extracted {} monotone mountains", mountains.len());

    let mut triangles = Vec::new();
    for mountain in &mountains {
        if mountain.is_degenerate() {
            continue;
        }
        triangles.extend(triangulate_mountain(mountain, config)?);
    }

    log::debug!("triangulated into {} triangles", triangles.len());
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_of(triangles: &[Triangle]) -> f64 {
        triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.vertices;
                ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
            })
            .sum()
    }

    #[test]
    fn unit_triangle_triangulates_to_itself() {
        let area = PolygonalArea::new(vec![Polygon::new(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(0.0, 1.0),
        ])]);
        let config = TriangulationConfig { rng_seed: Some(42), ..Default::default() };
        let triangles = triangulate(&area, &config).expect("triangulation should succeed");
        assert_eq!(triangles.len(), 1);
        assert!(Vertex::counter_clockwise(
            triangles[0].vertices[0],
            triangles[0].vertices[1],
            triangles[0].vertices[2]
        ));
        assert!((area_of(&triangles) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn unit_square_triangulates_to_two_triangles_covering_unit_area() {
        let area = PolygonalArea::new(vec![Polygon::new(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(0.0, 1.0),
        ])]);
        let config = TriangulationConfig { rng_seed: Some(99), ..Default::default() };
        let triangles = triangulate(&area, &config).expect("triangulation should succeed");
        assert_eq!(triangles.len(), 2);
        for t in &triangles {
            assert!(Vertex::counter_clockwise(t.vertices[0], t.vertices[1], t.vertices[2]));
        }
        assert!((area_of(&triangles) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn square_with_hole_triangulates_to_the_annulus() {
        let outer = Polygon::new(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(4.0, 4.0),
            Vertex::new(0.0, 4.0),
        ]);
        let hole = Polygon::new(vec![
            Vertex::new(1.0, 1.0),
            Vertex::new(3.0, 1.0),
            Vertex::new(3.0, 3.0),
            Vertex::new(1.0, 3.0),
        ]);
        let area = PolygonalArea::new(vec![outer, hole]);
        let config = TriangulationConfig { rng_seed: Some(13), ..Default::default() };
        let triangles = triangulate(&area, &config).expect("triangulation should succeed");
        assert!((area_of(&triangles) - (16.0 - 4.0)).abs() < 1e-6);
    }

    #[test]
    fn concave_octagon_covers_its_own_area_regardless_of_seed() {
        let vertices = vec![
            Vertex::new(-5.14, 4.73),
            Vertex::new(-5.68, 2.31),
            Vertex::new(-7.42, 3.65),
            Vertex::new(-8.82, 1.59),
            Vertex::new(-5.58, -1.99),
            Vertex::new(-1.62, -0.65),
            Vertex::new(-3.26, 0.45),
            Vertex::new(-0.1, 3.31),
        ];
        let area = PolygonalArea::new(vec![Polygon::new(vertices)]);

        let mut areas = Vec::new();
        for seed in [1, 2, 3] {
            let config = TriangulationConfig { rng_seed: Some(seed), ..Default::default() };
            let triangles = triangulate(&area, &config).expect("triangulation should succeed");
            for t in &triangles {
                assert!(Vertex::counter_clockwise(t.vertices[0], t.vertices[1], t.vertices[2]));
            }
            areas.push(area_of(&triangles));
        }
        for pair in areas.windows(2) {
            assert!((pair[0] - pair[1]).abs() < 1e-6);
        }
    }

    #[test]
    fn l_shape_with_horizontal_edge_triangulates_without_panicking() {
        let area = PolygonalArea::new(vec![Polygon::new(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(2.0, 0.0),
            Vertex::new(2.0, 1.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(1.0, 2.0),
            Vertex::new(0.0, 2.0),
        ])]);
        let config = TriangulationConfig { rng_seed: Some(77), ..Default::default() };
        let triangles = triangulate(&area, &config).expect("triangulation should succeed");
        assert!((area_of(&triangles) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn two_disjoint_triangles_triangulate_independently() {
        let t1 = Polygon::new(vec![Vertex::new(0.0, 0.0), Vertex::new(1.0, 0.0), Vertex::new(0.0, 1.0)]);
        let t2 = Polygon::new(vec![Vertex::new(5.0, 5.0), Vertex::new(6.0, 5.0), Vertex::new(5.0, 6.0)]);
        let area = PolygonalArea::new(vec![t1, t2]);
        let config = TriangulationConfig { rng_seed: Some(21), ..Default::default() };
        let triangles = triangulate(&area, &config).expect("triangulation should succeed");
        assert_eq!(triangles.len(), 2);
        assert!((area_of(&triangles) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_invalid_input() {
        let area = PolygonalArea::new(vec![Polygon::new(vec![Vertex::new(0.0, 0.0), Vertex::new(1.0, 0.0)])]);
        let config = TriangulationConfig::default();
        assert!(matches!(triangulate(&area, &config), Err(TriangulateError::InvalidInput(_))));
    }

    /// A regular n-gon is convex by construction, so its triangulation should
    /// always come out as exactly n-2 counter-clockwise triangles regardless
    /// of the random edge-insertion order quickcheck's seed drives.
    #[quickcheck_macros::quickcheck]
    fn convex_polygon_triangulates_into_n_minus_two_triangles(sides: u8, radius_milli: u32) -> quickcheck::TestResult {
        if radius_milli == 0 {
            return quickcheck::TestResult::discard();
        }
        let n = (sides % 20) as usize + 3;
        let radius = 1.0 + (radius_milli % 1000) as f64 / 100.0;
        let vertices: Vec<Vertex> = (0..n)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
                Vertex::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        let area = PolygonalArea::new(vec![Polygon::new(vertices)]);
        let config = TriangulationConfig { rng_seed: Some(radius_milli as u64), ..Default::default() };

        match triangulate(&area, &config) {
            Ok(triangles) => {
                let all_ccw = triangles
                    .iter()
                    .all(|t| Vertex::counter_clockwise(t.vertices[0], t.vertices[1], t.vertices[2]));
                quickcheck::TestResult::from_bool(triangles.len() == n - 2 && all_ccw)
            }
            Err(_) => quickcheck::TestResult::failed(),
        }
    }
}
