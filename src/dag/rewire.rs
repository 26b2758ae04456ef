use super::SearchDag;
use crate::error::TriangulateError;
use crate::geometry::{Edge, Vertex};
use crate::ids::{EdgeId, TrapezoidId};
use crate::trapezoid::TrapezoidStore;

impl SearchDag {
    fn edge_top(&self, edge: EdgeId) -> Vertex {
        self.trapezoids.edge(edge).top
    }

    fn edge_bottom(&self, edge: EdgeId) -> Vertex {
        self.trapezoids.edge(edge).bottom
    }

    fn extreme(&self, trap: TrapezoidId, top: bool, right: bool) -> Vertex {
        self.trapezoids
            .trapezoid(trap)
            .extreme_point(top, right, |e, y| self.trapezoids.edge_x_at(e, y))
    }

    /// Repairs `above`/`below` neighbour lists after every trapezoid on an
    /// edge-insertion walk has been split into a `(left, right)` pair,
    /// ordered top-to-bottom in `couples`. See SPEC_FULL section 4.4.
    pub(super) fn rewire_after_split(
        &mut self,
        edge: Edge,
        couples: &[(TrapezoidId, TrapezoidId)],
        top_just_inserted: bool,
        bottom_just_inserted: bool,
    ) -> Result<(), TriangulateError> {
        let (first_left, first_right) = couples[0];

        if top_just_inserted {
            let above = self.trapezoids.trapezoid(first_right).above.clone();
            if above.len() != 1 {
                return Err(TriangulateError::structural(
                    "top endpoint just inserted: expected exactly one trapezoid above",
                ));
            }
            self.trapezoids.trapezoid_mut(first_left).above = above.clone();
            let trap_above = above[0];
            self.trapezoids.trapezoid_mut(trap_above).below = vec![first_left, first_right];
        } else {
            let left_edge_top = self
                .trapezoids
                .trapezoid(first_left)
                .left_edge
                .map(|e| self.edge_top(e));
            let right_edge_top = self
                .trapezoids
                .trapezoid(first_right)
                .right_edge
                .map(|e| self.edge_top(e));

            if left_edge_top == Some(edge.top) {
                // left upward peak with an old edge: nothing to rewire.
                if self.trapezoids.trapezoid(first_right).above.len() != 1 {
                    return Err(TriangulateError::structural(
                        "left peak at top: expected exactly one trapezoid above",
                    ));
                }
            } else if right_edge_top == Some(edge.top) {
                if self.trapezoids.trapezoid(first_right).above.len() != 1 {
                    return Err(TriangulateError::structural(
                        "right peak at top: expected exactly one trapezoid above",
                    ));
                }
                let above = std::mem::take(&mut self.trapezoids.trapezoid_mut(first_right).above);
                self.trapezoids.trapezoid_mut(first_left).above = above.clone();
                TrapezoidStore::replace_in(
                    &mut self.trapezoids.trapezoid_mut(above[0]).below,
                    first_right,
                    first_left,
                );
            } else {
                let above = self.trapezoids.trapezoid(first_right).above.clone();
                if above.len() != 2 {
                    return Err(TriangulateError::structural(
                        "new edge extends an old edge above: expected two trapezoids above",
                    ));
                }
                let (left_above, right_above) = (above[0], above[1]);
                self.trapezoids.trapezoid_mut(first_left).above = vec![left_above];
                self.trapezoids.trapezoid_mut(first_right).above = vec![right_above];
                TrapezoidStore::replace_in(
                    &mut self.trapezoids.trapezoid_mut(left_above).below,
                    first_right,
                    first_left,
                );
            }
        }

        let (last_left, last_right) = *couples.last().unwrap();

        if bottom_just_inserted {
            let below = self.trapezoids.trapezoid(last_right).below.clone();
            if below.len() != 1 {
                return Err(TriangulateError::structural(
                    "bottom endpoint just inserted: expected exactly one trapezoid below",
                ));
            }
            self.trapezoids.trapezoid_mut(last_left).below = below.clone();
            let trap_below = below[0];
            self.trapezoids.trapezoid_mut(trap_below).above = vec![last_left, last_right];
        } else {
            let left_edge_bottom = self
                .trapezoids
                .trapezoid(last_left)
                .left_edge
                .map(|e| self.edge_bottom(e));
            let right_edge_bottom = self
                .trapezoids
                .trapezoid(last_right)
                .right_edge
                .map(|e| self.edge_bottom(e));

            if left_edge_bottom == Some(edge.bottom) {
                if self.trapezoids.trapezoid(last_right).below.len() != 1 {
                    return Err(TriangulateError::structural(
                        "left peak at bottom: expected exactly one trapezoid below",
                    ));
                }
            } else if right_edge_bottom == Some(edge.bottom) {
                if self.trapezoids.trapezoid(last_right).below.len() != 1 {
                    return Err(TriangulateError::structural(
                        "right peak at bottom: expected exactly one trapezoid below",
                    ));
                }
                let below = std::mem::take(&mut self.trapezoids.trapezoid_mut(last_right).below);
                self.trapezoids.trapezoid_mut(last_left).below = below.clone();
                TrapezoidStore::replace_in(
                    &mut self.trapezoids.trapezoid_mut(below[0]).above,
                    last_right,
                    last_left,
                );
            } else {
                let below = self.trapezoids.trapezoid(last_right).below.clone();
                if below.len() != 2 {
                    return Err(TriangulateError::structural(
                        "new edge extends an old edge below: expected two trapezoids below",
                    ));
                }
                let (left_below, right_below) = (below[0], below[1]);
                self.trapezoids.trapezoid_mut(last_left).below = vec![left_below];
                self.trapezoids.trapezoid_mut(last_right).below = vec![right_below];
                TrapezoidStore::replace_in(
                    &mut self.trapezoids.trapezoid_mut(left_below).above,
                    last_right,
                    last_left,
                );
            }
        }

        for i in 0..couples.len() - 1 {
            let (top_left, top_right) = couples[i];
            let (bottom_left, bottom_right) = couples[i + 1];

            let top_right_below = self.trapezoids.trapezoid(top_right).below.clone();
            if top_right_below.len() == 2 {
                // downward branch
                if self.trapezoids.trapezoid(bottom_right).above.len() != 1 {
                    return Err(TriangulateError::structural(
                        "downward branch: expected one trapezoid above the bottom-right trapezoid",
                    ));
                }
                let branch_point = self.extreme(top_right_below[0], true, true);
                if edge.point_right_of(branch_point) {
                    self.trapezoids.trapezoid_mut(top_left).below = vec![bottom_left];
                    self.trapezoids.trapezoid_mut(bottom_left).above = vec![top_left];
                } else {
                    let additional = top_right_below[0];
                    self.trapezoids.trapezoid_mut(top_right).below = vec![bottom_right];
                    self.trapezoids.trapezoid_mut(bottom_right).above = vec![top_right];

                    self.trapezoids.trapezoid_mut(top_left).below = vec![additional, bottom_left];
                    self.trapezoids.trapezoid_mut(bottom_left).above = vec![top_left];
                    self.trapezoids.trapezoid_mut(additional).above = vec![top_left];
                }
            } else {
                if top_right_below.len() != 1 {
                    return Err(TriangulateError::structural(
                        "expected exactly one trapezoid below the top-right trapezoid",
                    ));
                }
                let bottom_right_above = self.trapezoids.trapezoid(bottom_right).above.clone();
                if bottom_right_above.len() == 2 {
                    // upward branch
                    let branch_point = self.extreme(bottom_right_above[0], false, true);
                    if edge.point_right_of(branch_point) {
                        self.trapezoids.trapezoid_mut(top_left).below = vec![bottom_left];
                        self.trapezoids.trapezoid_mut(bottom_left).above = vec![top_left];
                    } else {
                        let additional = bottom_right_above[0];
                        self.trapezoids.trapezoid_mut(top_right).below = vec![bottom_right];
                        self.trapezoids.trapezoid_mut(bottom_right).above = vec![top_right];

                        self.trapezoids.trapezoid_mut(bottom_left).above = vec![additional, top_left];
                        self.trapezoids.trapezoid_mut(top_left).below = vec![bottom_left];
                        self.trapezoids.trapezoid_mut(additional).below = vec![bottom_left];
                    }
                } else {
                    if bottom_right_above.len() != 1 {
                        return Err(TriangulateError::structural(
                            "expected exactly one trapezoid above the bottom-right trapezoid",
                        ));
                    }
                    self.trapezoids.trapezoid_mut(top_left).below = vec![bottom_left];
                    self.trapezoids.trapezoid_mut(bottom_left).above = vec![top_left];
                }
            }
        }

        Ok(())
    }
}
