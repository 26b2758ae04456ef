use super::{NodeKind, SearchDag};
use crate::error::TriangulateError;
use crate::geometry::Edge;
use crate::ids::{NodeId, TrapezoidId};

impl SearchDag {
    fn trapezoid_node(&self, trap: TrapezoidId) -> NodeId {
        self.trapezoids.trapezoid(trap).node
    }

    /// Walks from `start` downward until reaching the trapezoid whose
    /// `bottom_vertex` equals `edge.bottom`, returning the nodes visited
    /// along the way (not including `start`), in top-to-bottom order.
    fn walk_down(&self, start: TrapezoidId, edge: Edge) -> Result<Vec<NodeId>, TriangulateError> {
        let mut visited = Vec::new();
        let mut current = start;
        while self.trapezoids.trapezoid(current).bottom_vertex != Some(edge.bottom) {
            let below = self.trapezoids.trapezoid(current).below.clone();
            current = match below.len() {
                1 => below[0],
                2 => {
                    let corner = self.trapezoids.trapezoid(below[0]).extreme_point(true, true, |e, y| {
                        self.trapezoids.edge_x_at(e, y)
                    });
                    if edge.point_right_of(corner) {
                        below[0]
                    } else {
                        below[1]
                    }
                }
                _ => {
                    return Err(TriangulateError::structural(format!(
                        "trapezoid {current:?} has {} neighbours below while walking down",
                        below.len()
                    )))
                }
            };
            visited.push(self.trapezoid_node(current));
        }
        Ok(visited)
    }

    /// Mirror of [`Self::walk_down`], walking upward until reaching the
    /// trapezoid whose `top_vertex` equals `edge.top`.
    fn walk_up(&self, start: TrapezoidId, edge: Edge) -> Result<Vec<NodeId>, TriangulateError> {
        let mut visited = Vec::new();
        let mut current = start;
        while self.trapezoids.trapezoid(current).top_vertex != Some(edge.top) {
            let above = self.trapezoids.trapezoid(current).above.clone();
            current = match above.len() {
                1 => above[0],
                2 => {
                    let corner = self.trapezoids.trapezoid(above[0]).extreme_point(false, true, |e, y| {
                        self.trapezoids.edge_x_at(e, y)
                    });
                    if edge.point_right_of(corner) {
                        above[0]
                    } else {
                        above[1]
                    }
                }
                _ => {
                    return Err(TriangulateError::structural(format!(
                        "trapezoid {current:?} has {} neighbours above while walking up",
                        above.len()
                    )))
                }
            };
            visited.push(self.trapezoid_node(current));
        }
        Ok(visited)
    }

    /// The full ordered (top-to-bottom) list of leaf nodes whose trapezoids
    /// the insertion of `edge` must split, starting from the trapezoid
    /// containing its midpoint.
    pub(super) fn nodes_to_split(&self, edge: Edge) -> Result<Vec<NodeId>, TriangulateError> {
        let start_trap = self.locate(edge.midpoint())?;
        let start_node = self.trapezoid_node(start_trap);

        let mut down = self.walk_down(start_trap, edge)?;
        let mut up = self.walk_up(start_trap, edge)?;
        up.reverse();

        let mut ordered = up;
        ordered.push(start_node);
        ordered.append(&mut down);

        for node in &ordered {
            if !matches!(self.nodes.node(*node).kind, NodeKind::Leaf(_)) {
                return Err(TriangulateError::structural(format!(
                    "node {node:?} on the insertion walk is not a leaf"
                )));
            }
        }
        Ok(ordered)
    }
}
