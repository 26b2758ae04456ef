use ahash::RandomState;
use std::collections::{HashMap, HashSet};

use super::Trapezoid;
use crate::error::TriangulateError;
use crate::geometry::Edge;
use crate::ids::{EdgeId, EdgeIdFactory, NodeId, TrapezoidId, TrapezoidIdFactory};

/// Owns every trapezoid and edge created while building one decomposition,
/// plus the right-edge registry `R: EdgeId -> set<TrapezoidId>` used by the
/// inside/outside labelling.
///
/// Scoping this to one store (rather than, as in the design this was
/// translated from, a class-level registry) means two triangulations never
/// share state even if run concurrently on independent threads.
#[derive(Debug)]
pub struct TrapezoidStore {
    trapezoids: Vec<Trapezoid>,
    edges: Vec<Edge>,
    trapezoid_ids: TrapezoidIdFactory,
    edge_ids: EdgeIdFactory,
    registry: HashMap<EdgeId, HashSet<TrapezoidId, RandomState>, RandomState>,
}

impl TrapezoidStore {
    pub fn new() -> Self {
        Self {
            trapezoids: Vec::new(),
            edges: Vec::new(),
            trapezoid_ids: TrapezoidIdFactory::new(),
            edge_ids: EdgeIdFactory::new(),
            registry: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn alloc_trapezoid(&mut self, node: NodeId) -> TrapezoidId {
        let id = self.trapezoid_ids.one_more();
        debug_assert_eq!(id.0, self.trapezoids.len());
        self.trapezoids.push(Trapezoid::new(node));
        id
    }

    pub fn alloc_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.edge_ids.one_more();
        debug_assert_eq!(id.0, self.edges.len());
        self.edges.push(edge);
        id
    }

    pub fn trapezoid(&self, id: TrapezoidId) -> &Trapezoid {
        &self.trapezoids[id.0]
    }

    pub fn trapezoid_mut(&mut self, id: TrapezoidId) -> &mut Trapezoid {
        &mut self.trapezoids[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn edge_x_at(&self, id: EdgeId, y: f64) -> f64 {
        self.edge(id).x_at(y)
    }

    pub fn trapezoid_count(&self) -> usize {
        self.trapezoids.len()
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    pub fn trapezoid_ids(&self) -> impl Iterator<Item = TrapezoidId> {
        (0..self.trapezoids.len()).map(TrapezoidId)
    }

    /// The only place `right_edge` is ever mutated, so the registry
    /// invariant (`R[e] == {T : T.right_edge == e}`) holds by construction.
    pub fn set_right_edge(&mut self, trap: TrapezoidId, new: Option<EdgeId>) {
        let old = self.trapezoids[trap.0].right_edge;
        if old == new {
            return;
        }
        if let Some(old_edge) = old {
            if let Some(set) = self.registry.get_mut(&old_edge) {
                set.remove(&trap);
            }
        }
        self.trapezoids[trap.0].right_edge = new;
        if let Some(new_edge) = new {
            self.registry
                .entry(new_edge)
                .or_insert_with(|| HashSet::with_hasher(RandomState::new()))
                .insert(trap);
        }
    }

    pub fn registry_members(&self, edge: EdgeId) -> impl Iterator<Item = TrapezoidId> + '_ {
        self.registry.get(&edge).into_iter().flatten().copied()
    }

    pub fn any_registry_member(&self, edge: EdgeId) -> Result<TrapezoidId, TriangulateError> {
        self.registry_members(edge).next().ok_or_else(|| {
            TriangulateError::structural(format!(
                "edge {edge:?} has no trapezoid registered against it"
            ))
        })
    }

    pub fn unregister(&mut self, trap: TrapezoidId) {
        let right = self.trapezoids[trap.0].right_edge;
        if let Some(edge) = right {
            if let Some(set) = self.registry.get_mut(&edge) {
                set.remove(&trap);
            }
        }
    }

    /// Replaces every occurrence of `from` by `to` in `v`, as a drop-in for
    /// the source's `replace(list, old, new)` helper.
    pub fn replace_in(v: &mut [TrapezoidId], from: TrapezoidId, to: TrapezoidId) {
        for entry in v.iter_mut() {
            if *entry == from {
                *entry = to;
            }
        }
    }

    /// Debug-only check of the adjacency-symmetry invariant (see SPEC_FULL
    /// section 8); intentionally O(n) and meant for tests, not hot paths.
    pub fn check_adjacency_symmetry(&self) -> Result<(), TriangulateError> {
        for (i, t) in self.trapezoids.iter().enumerate() {
            let id = TrapezoidId(i);
            for &below in &t.below {
                if !self.trapezoids[below.0].above.contains(&id) {
                    return Err(TriangulateError::structural(format!(
                        "{id:?} is below {below:?} but not listed in its above"
                    )));
                }
            }
            for &above in &t.above {
                if !self.trapezoids[above.0].below.contains(&id) {
                    return Err(TriangulateError::structural(format!(
                        "{id:?} is above {above:?} but not listed in its below"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for TrapezoidStore {
    fn default() -> Self {
        Self::new()
    }
}
