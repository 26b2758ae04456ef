use super::{Edge, Vertex};
use crate::error::TriangulateError;

/// A simple closed polygon, given as an ordered loop of vertices.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }
}

/// A polygonal area: a set of simple polygons whose interior is defined by
/// the odd-even (parity) rule across all of them. A single outer loop plus
/// one or more hole loops is the common case; disjoint outer loops are also
/// supported.
#[derive(Debug, Clone)]
pub struct PolygonalArea {
    pub polygons: Vec<Polygon>,
}

impl PolygonalArea {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn edges(&self) -> Vec<Edge> {
        self.polygons.iter().flat_map(Polygon::edges).collect()
    }

    /// Rejects loops with fewer than three vertices, a repeated vertex
    /// within one loop, a degenerate (zero-length) edge, or any pair of
    /// edges (within one loop or across loops) that properly cross. Edges
    /// that merely share an endpoint — consecutive edges of the same loop,
    /// or a hole corner touching the outer boundary — are not crossings and
    /// are allowed; see the coincident-vertex decision in DESIGN.md. This
    /// last check is O(n^2) in the total edge count.
    pub fn validate(&self) -> Result<(), TriangulateError> {
        if self.polygons.is_empty() {
            return Err(TriangulateError::invalid_input(
                "polygonal area has no polygons",
            ));
        }
        for polygon in &self.polygons {
            if polygon.vertices.len() < 3 {
                return Err(TriangulateError::invalid_input(
                    "a polygon loop needs at least three vertices",
                ));
            }
            for edge in polygon.edges() {
                if edge.bottom == edge.top {
                    return Err(TriangulateError::invalid_input(
                        "polygon loop contains a zero-length edge",
                    ));
                }
            }
            for i in 0..polygon.vertices.len() {
                for j in (i + 1)..polygon.vertices.len() {
                    if polygon.vertices[i] == polygon.vertices[j] {
                        return Err(TriangulateError::invalid_input(
                            "polygon loop repeats a vertex",
                        ));
                    }
                }
            }
        }

        let all_edges = self.edges();
        for i in 0..all_edges.len() {
            for j in (i + 1)..all_edges.len() {
                let (e1, e2) = (all_edges[i], all_edges[j]);
                let shares_endpoint =
                    e1.bottom == e2.bottom || e1.bottom == e2.top || e1.top == e2.bottom || e1.top == e2.top;
                if shares_endpoint {
                    continue;
                }
                if Vertex::segment_intersect(e1.bottom, e1.top, e2.bottom, e2.top) {
                    return Err(TriangulateError::invalid_input(
                        "polygon edges self-intersect",
                    ));
                }
            }
        }

        Ok(())
    }
}
