use super::{NodeKind, SearchDag};
use crate::error::TriangulateError;
use crate::geometry::Edge;
use crate::ids::{EdgeId, TrapezoidId};

impl SearchDag {
    /// Inserts `edge` (already allocated as `edge_id` in the trapezoid
    /// store) into the decomposition: walks the trapezoid stack between its
    /// endpoints, splits every trapezoid on the walk, rewires neighbours,
    /// and merges any stacks made redundant by the split.
    ///
    /// `top_just_inserted`/`bottom_just_inserted` tell the rewiring pass
    /// whether `edge`'s endpoint was a brand-new vertex (inserted moments
    /// ago purely to host this edge) or an existing one already shared by
    /// another edge — the two cases need different neighbour surgery at
    /// that endpoint (see SPEC_FULL section 4.4).
    pub fn insert_edge(
        &mut self,
        edge_id: EdgeId,
        edge: Edge,
        top_just_inserted: bool,
        bottom_just_inserted: bool,
    ) -> Result<(), TriangulateError> {
        let nodes = self.nodes_to_split(edge)?;

        let mut couples: Vec<(TrapezoidId, TrapezoidId)> = Vec::with_capacity(nodes.len());
        for node in nodes {
            let trap = match self.nodes.node(node).kind {
                NodeKind::Leaf(t) => t,
                _ => {
                    return Err(TriangulateError::structural(format!(
                        "node {node:?} queued for edge split is not a leaf"
                    )))
                }
            };
            couples.push(self.split_by_edge(node, trap, edge_id)?);
        }

        self.rewire_after_split(edge, &couples, top_just_inserted, bottom_just_inserted)?;
        self.merge_redundant_stacks(&couples)?;

        Ok(())
    }
}
