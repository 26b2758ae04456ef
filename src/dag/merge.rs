use super::SearchDag;
use crate::error::TriangulateError;
use crate::ids::TrapezoidId;
use crate::trapezoid::TrapezoidStore;

impl SearchDag {
    /// Merges `bottom` into `top`, keeping `top`'s identity. Requires `top`
    /// to be immediately above `bottom` and for both to share the same
    /// `left_edge`/`right_edge` — callers (only [`Self::merge_redundant_stacks`])
    /// guarantee this before calling.
    fn merge_pair(&mut self, top: TrapezoidId, bottom: TrapezoidId) -> Result<(), TriangulateError> {
        if !self.trapezoids.trapezoid(bottom).above.contains(&top)
            || !self.trapezoids.trapezoid(top).below.contains(&bottom)
        {
            return Err(TriangulateError::structural(format!(
                "merge_pair: {top:?} and {bottom:?} are not adjacent"
            )));
        }

        let new_below = self.trapezoids.trapezoid(bottom).below.clone();
        self.trapezoids.trapezoid_mut(top).bottom_vertex = self.trapezoids.trapezoid(bottom).bottom_vertex;
        self.trapezoids.trapezoid_mut(top).below = new_below.clone();

        for trap in new_below {
            TrapezoidStore::replace_in(&mut self.trapezoids.trapezoid_mut(trap).above, bottom, top);
        }

        let bottom_node = self.trapezoids.trapezoid(bottom).node;
        let top_node = self.trapezoids.trapezoid(top).node;
        self.replace_leaf(bottom_node, top_node)?;
        self.trapezoids.unregister(bottom);

        Ok(())
    }

    /// Scans each side (left at index 0, right at index 1) of the freshly
    /// split `couples` top-to-bottom, merging every maximal run of
    /// vertically adjacent trapezoids that share both side edges.
    pub(super) fn merge_redundant_stacks(
        &mut self,
        couples: &[(TrapezoidId, TrapezoidId)],
    ) -> Result<(), TriangulateError> {
        for side in 0..2 {
            let mut distance_to_top_neighbor = 1usize;
            for i in 1..couples.len() {
                let top_idx = i - distance_to_top_neighbor;
                let top_trap = pick(couples[top_idx], side);
                let bottom_trap = pick(couples[i], side);

                let same_sides = self.trapezoids.trapezoid(top_trap).left_edge
                    == self.trapezoids.trapezoid(bottom_trap).left_edge
                    && self.trapezoids.trapezoid(top_trap).right_edge
                        == self.trapezoids.trapezoid(bottom_trap).right_edge;

                if same_sides {
                    self.merge_pair(top_trap, bottom_trap)?;
                    distance_to_top_neighbor += 1;
                } else {
                    distance_to_top_neighbor = 1;
                }
            }
        }
        Ok(())
    }
}

fn pick(couple: (TrapezoidId, TrapezoidId), side: usize) -> TrapezoidId {
    if side == 0 {
        couple.0
    } else {
        couple.1
    }
}
