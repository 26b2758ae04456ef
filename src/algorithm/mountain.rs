use ahash::RandomState;
use std::collections::HashMap;

use crate::dag::SearchDag;
use crate::error::TriangulateError;
use crate::geometry::Vertex;
use crate::ids::{EdgeId, TrapezoidId};

/// A y-monotone mountain: a straight `base` edge on one side and a
/// y-monotone `chain` of vertices (including the base's own endpoints at
/// both ends) on the other.
#[derive(Debug, Clone)]
pub struct MonotoneMountain {
    pub base: EdgeId,
    pub chain: Vec<Vertex>,
}

impl MonotoneMountain {
    /// A mountain with no interior vertices — just the base's two
    /// endpoints — contributes no triangles.
    pub fn is_degenerate(&self) -> bool {
        self.chain.len() < 3
    }
}

/// Groups every inside trapezoid by each of its two side edges (each side
/// edge is the `base` of one mountain) and threads the trapezoids' own
/// `(bottom_vertex, top_vertex)` pairs into that base's chain.
pub fn extract_mountains(
    dag: &SearchDag,
    inside: &[TrapezoidId],
) -> Result<Vec<MonotoneMountain>, TriangulateError> {
    let mut next_above: HashMap<EdgeId, HashMap<Vertex, Vertex, RandomState>, RandomState> =
        HashMap::with_hasher(RandomState::new());

    for &t in inside {
        let trap = dag.trapezoid(t);
        let bottom = trap.bottom_vertex.ok_or_else(|| {
            TriangulateError::structural("inside trapezoid has no bottom vertex")
        })?;
        let top = trap
            .top_vertex
            .ok_or_else(|| TriangulateError::structural("inside trapezoid has no top vertex"))?;

        for side_edge in [trap.left_edge, trap.right_edge] {
            let edge_id = side_edge.ok_or_else(|| {
                TriangulateError::structural("inside trapezoid is missing a side edge")
            })?;
            next_above
                .entry(edge_id)
                .or_insert_with(|| HashMap::with_hasher(RandomState::new()))
                .insert(bottom, top);
        }
    }

    if next_above.is_empty() {
        log::debug!("no inside trapezoids: area has empty interior");
    }

    // `next_above`'s hasher is randomly seeded per process, so iterating it
    // directly would make output order depend on the hasher rather than on
    // `rng_seed` alone. Sort the keys first so the result is a pure function
    // of the permutation edge insertion order produced.
    let mut edge_ids: Vec<EdgeId> = next_above.keys().copied().collect();
    edge_ids.sort_by_key(|id| id.0);

    let mut mountains = Vec::with_capacity(edge_ids.len());
    for edge_id in edge_ids {
        let steps = &next_above[&edge_id];
        let edge = *dag.edge(edge_id);
        let mut chain = vec![edge.bottom];
        let mut current = edge.bottom;
        while let Some(&next) = steps.get(&current) {
            chain.push(next);
            current = next;
        }
        if current != edge.top {
            return Err(TriangulateError::structural(
                "monotone mountain chain did not reach its base's top vertex",
            ));
        }
        mountains.push(MonotoneMountain { base: edge_id, chain });
    }

    Ok(mountains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::inside::inside_trapezoids;
    use crate::algorithm::trapezoidation::trapezoidate;
    use crate::config::TriangulationConfig;
    use crate::geometry::{Polygon, PolygonalArea, Vertex};

    #[test]
    fn unit_triangle_has_one_non_degenerate_mountain() {
        let area = PolygonalArea::new(vec![Polygon::new(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(0.0, 1.0),
        ])]);
        let config = TriangulationConfig { rng_seed: Some(5), ..Default::default() };
        let dag = trapezoidate(&area, &config).unwrap();
        let inside = inside_trapezoids(&dag).unwrap();
        let mountains = extract_mountains(&dag, &inside).unwrap();
        assert!(mountains.iter().any(|m| !m.is_degenerate()));
    }

    #[test]
    fn same_seed_yields_the_same_mountain_order() {
        let area = PolygonalArea::new(vec![Polygon::new(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(4.0, 3.0),
            Vertex::new(2.0, 5.0),
            Vertex::new(0.0, 3.0),
        ])]);
        let config = TriangulationConfig { rng_seed: Some(11), ..Default::default() };

        let bases_of = || {
            let dag = trapezoidate(&area, &config).unwrap();
            let inside = inside_trapezoids(&dag).unwrap();
            extract_mountains(&dag, &inside).unwrap().iter().map(|m| m.base).collect::<Vec<_>>()
        };
        assert_eq!(bases_of(), bases_of());
    }
}
