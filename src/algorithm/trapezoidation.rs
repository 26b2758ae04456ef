use ahash::RandomState;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::config::TriangulationConfig;
use crate::dag::SearchDag;
use crate::error::TriangulateError;
use crate::geometry::{PolygonalArea, Vertex};

/// Builds the trapezoidal decomposition of `area`: extracts its edges,
/// inserts them in a random order (so the DAG's expected depth stays
/// logarithmic regardless of input order), and returns the resulting
/// [`SearchDag`].
pub fn trapezoidate(area: &PolygonalArea, config: &TriangulationConfig) -> Result<SearchDag, TriangulateError> {
    area.validate()?;

    let mut edges = area.edges();
    let mut rng: StdRng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    edges.shuffle(&mut rng);

    log::debug!("trapezoidating {} edges", edges.len());

    let mut dag = SearchDag::new();
    let mut already_inserted: HashSet<Vertex, RandomState> = HashSet::with_hasher(RandomState::new());

    for edge in edges {
        let top_should_be_inserted = already_inserted.insert(edge.top);
        if top_should_be_inserted {
            dag.insert_vertex(edge.top)?;
        }
        let bottom_should_be_inserted = already_inserted.insert(edge.bottom);
        if bottom_should_be_inserted {
            dag.insert_vertex(edge.bottom)?;
        }

        let edge_id = dag.trapezoids_mut().alloc_edge(edge);
        dag.insert_edge(edge_id, edge, top_should_be_inserted, bottom_should_be_inserted)?;
    }

    log::debug!("trapezoidation produced {} trapezoids", dag.trapezoids().trapezoid_count());

    Ok(dag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    #[test]
    fn trapezoidates_unit_triangle() {
        let area = PolygonalArea::new(vec![Polygon::new(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(0.0, 1.0),
        ])]);
        let config = TriangulationConfig { rng_seed: Some(1), ..Default::default() };
        let dag = trapezoidate(&area, &config).expect("trapezoidation should succeed");
        assert!(dag.trapezoids().trapezoid_count() >= 3);
        dag.trapezoids().check_adjacency_symmetry().expect("adjacency must stay symmetric");
    }

    #[test]
    fn trapezoidates_square_with_hole() {
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
        let config = TriangulationConfig { rng_seed: Some(7), ..Default::default() };
        let dag = trapezoidate(&area, &config).expect("trapezoidation should succeed");
        dag.trapezoids().check_adjacency_symmetry().expect("adjacency must stay symmetric");
    }
}
