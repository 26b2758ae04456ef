use crate::config::TriangulationConfig;
use crate::error::TriangulateError;
use crate::geometry::{Triangle, Vertex};

use super::mountain::MonotoneMountain;

/// Triangulates one monotone mountain by adaptive ear-clipping: prefers ears
/// whose angle stays under `config.angle_threshold_degrees`, and relaxes the
/// threshold just past the narrowest rejected angle whenever a full pass
/// finds no acceptable ear, per SPEC_FULL section 4.8.
pub fn triangulate_mountain(
    mountain: &MonotoneMountain,
    config: &TriangulationConfig,
) -> Result<Vec<Triangle>, TriangulateError> {
    let chain = &mountain.chain;
    let n = chain.len();
    if n < 3 {
        return Ok(Vec::new());
    }

    let base_bottom_idx = 0;
    let base_top_idx = n - 1;
    let convex_order = Vertex::counter_clockwise(chain[base_top_idx], chain[base_bottom_idx], chain[1]);

    // A doubly linked list over `chain`'s indices, so an emitted ear can be
    // unlinked in O(1) without physically shifting the vertex sequence.
    let mut below: Vec<Option<usize>> = (0..n).map(|i| if i == 0 { None } else { Some(i - 1) }).collect();
    let mut above: Vec<Option<usize>> = (0..n).map(|i| if i == n - 1 { None } else { Some(i + 1) }).collect();

    let mut triangles = Vec::new();
    let mut threshold = config.angle_threshold_degrees;
    let epsilon = config.angle_epsilon_degrees.abs().max(1e-9);

    loop {
        if above[base_bottom_idx] == Some(base_top_idx) {
            break;
        }

        let mut cursor = above[base_bottom_idx].ok_or_else(|| {
            TriangulateError::structural("monotone mountain chain collapsed before reaching its top")
        })?;
        let mut smallest_skipped: Option<f64> = None;
        let mut progressed = false;

        while cursor != base_top_idx {
            let bi = below[cursor].ok_or_else(|| {
                TriangulateError::structural("ear-clipping cursor has no vertex below it")
            })?;
            let ai = above[cursor].ok_or_else(|| {
                TriangulateError::structural("ear-clipping cursor has no vertex above it")
            })?;
            let (b, v, a) = (chain[bi], chain[cursor], chain[ai]);

            if Vertex::collinear(b, v, a) {
                // exactly collinear: zero-area contribution, skip without
                // emitting a triangle rather than treating it as reflex or
                // letting threshold relaxation try to resolve it.
                below[ai] = Some(bi);
                above[bi] = Some(ai);
                progressed = true;
                cursor = if bi == base_bottom_idx { ai } else { bi };
                continue;
            }

            if Vertex::counter_clockwise(b, v, a) != convex_order {
                // reflex vertex: cannot be an ear regardless of angle
                cursor = ai;
                continue;
            }

            let angle = Vertex::angle(b, v, a);
            if angle > threshold {
                smallest_skipped = Some(smallest_skipped.map_or(angle, |s| s.min(angle)));
                cursor = ai;
                continue;
            }

            triangles.push(Triangle::oriented(b, v, a));
            below[ai] = Some(bi);
            above[bi] = Some(ai);
            progressed = true;
            cursor = if bi == base_bottom_idx { ai } else { bi };
        }

        if above[base_bottom_idx] == Some(base_top_idx) {
            break;
        }

        match smallest_skipped {
            Some(next_threshold) => {
                threshold = next_threshold + epsilon;
            }
            None if progressed => {
                // a full pass removed ears but still has more interior
                // vertices left with no rejects recorded; loop again at the
                // same threshold.
            }
            None => {
                return Err(TriangulateError::structural(
                    "ear-clipping pass made no progress and rejected no candidate",
                ));
            }
        }
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EdgeId;

    fn mountain(chain: Vec<Vertex>) -> MonotoneMountain {
        MonotoneMountain { base: EdgeId(0), chain }
    }

    #[test]
    fn degenerate_mountain_yields_no_triangles() {
        let m = mountain(vec![Vertex::new(0.0, 0.0), Vertex::new(0.0, 1.0)]);
        let config = TriangulationConfig::default();
        assert!(triangulate_mountain(&m, &config).unwrap().is_empty());
    }

    #[test]
    fn triangle_shaped_mountain_yields_one_triangle() {
        let m = mountain(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.5),
            Vertex::new(0.0, 1.0),
        ]);
        let config = TriangulationConfig::default();
        let triangles = triangulate_mountain(&m, &config).unwrap();
        assert_eq!(triangles.len(), 1);
    }

    #[test]
    fn mountain_triangles_have_positive_area() {
        let m = mountain(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.5),
            Vertex::new(0.0, 1.0),
        ]);
        let config = TriangulationConfig::default();
        let triangles = triangulate_mountain(&m, &config).unwrap();
        let total_area: f64 = triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.vertices;
                ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
            })
            .sum();
        assert!(total_area > 0.0);
    }

    #[test]
    fn four_vertex_mountain_yields_two_triangles() {
        let m = mountain(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.3),
            Vertex::new(1.0, 0.7),
            Vertex::new(0.0, 1.0),
        ]);
        let config = TriangulationConfig::default();
        let triangles = triangulate_mountain(&m, &config).unwrap();
        assert_eq!(triangles.len(), 2);
    }

    #[test]
    fn collinear_interior_vertex_is_skipped_without_a_triangle() {
        let m = mountain(vec![Vertex::new(0.0, 0.0), Vertex::new(1.0, 1.0), Vertex::new(2.0, 2.0)]);
        let config = TriangulationConfig::default();
        let triangles = triangulate_mountain(&m, &config).unwrap();
        assert!(triangles.is_empty());
    }

    #[test]
    fn relaxes_threshold_when_no_ear_fits() {
        let m = mountain(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.5),
            Vertex::new(0.0, 1.0),
        ]);
        let config = TriangulationConfig {
            angle_threshold_degrees: 1.0,
            angle_epsilon_degrees: 0.1,
            rng_seed: None,
        };
        let triangles = triangulate_mountain(&m, &config).unwrap();
        assert_eq!(triangles.len(), 1);
    }
}
