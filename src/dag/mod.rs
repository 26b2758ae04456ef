//! The search DAG: a rooted structure of trapezoid leaves and vertex/edge
//! inner nodes that maps any query point to its containing trapezoid.

mod insert;
mod merge;
mod node;
mod rewire;
mod walk;

pub use self::node::{Node, NodeKind, NodeStore};

use crate::error::TriangulateError;
use crate::geometry::{Edge, Vertex};
use crate::ids::{EdgeId, NodeId, TrapezoidId};
use crate::trapezoid::{Trapezoid, TrapezoidStore};

/// Owns the node arena and the trapezoid store for one trapezoidation run,
/// and exposes the operations that mutate both in lockstep: locate, insert
/// a vertex, insert an edge.
pub struct SearchDag {
    pub(crate) nodes: NodeStore,
    pub(crate) trapezoids: TrapezoidStore,
    pub(crate) root: NodeId,
}

impl SearchDag {
    /// A fresh decomposition with a single unbounded trapezoid covering the
    /// whole plane.
    pub fn new() -> Self {
        let mut nodes = NodeStore::new();
        let mut trapezoids = TrapezoidStore::new();
        // chicken-and-egg: allocate the node first, then the trapezoid that
        // points back at it, then fix up the node to point at the trapezoid.
        let root = nodes.alloc(Node::leaf(TrapezoidId(0)));
        let trap = trapezoids.alloc_trapezoid(root);
        debug_assert_eq!(trap, TrapezoidId(0));
        Self { nodes, trapezoids, root }
    }

    pub fn edge_x_at(&self, id: EdgeId, y: f64) -> f64 {
        self.trapezoids.edge_x_at(id, y)
    }

    fn node_trapezoid(&self, node: NodeId) -> Result<TrapezoidId, TriangulateError> {
        match self.nodes.node(node).kind {
            NodeKind::Leaf(t) => Ok(t),
            _ => Err(TriangulateError::structural(format!(
                "expected {node:?} to be a trapezoid leaf"
            ))),
        }
    }

    /// Descends from `start` to the leaf covering `query`.
    pub fn locate_from(&self, start: NodeId, query: Vertex) -> Result<TrapezoidId, TriangulateError> {
        let mut current = start;
        loop {
            match &self.nodes.node(current).kind {
                NodeKind::Leaf(t) => return Ok(*t),
                NodeKind::Vertex { vertex, below, above } => {
                    current = if query > *vertex { *above } else { *below };
                }
                NodeKind::Edge { edge, left, right } => {
                    let e = *self.trapezoids.edge(*edge);
                    current = if e.point_right_of(query) { *right } else { *left };
                }
            }
        }
    }

    pub fn locate(&self, query: Vertex) -> Result<TrapezoidId, TriangulateError> {
        self.locate_from(self.root, query)
    }

    /// Splits the leaf covering `vertex` into a bottom and a top trapezoid,
    /// transmuting the leaf into a vertex-branching inner node. Returns the
    /// new `(bottom, top)` trapezoid ids.
    pub fn insert_vertex(&mut self, vertex: Vertex) -> Result<(TrapezoidId, TrapezoidId), TriangulateError> {
        let leaf = self.locate(vertex)?;
        let leaf_node = self.trapezoids.trapezoid(leaf).node;
        self.split_by_vertex(leaf_node, vertex)
    }

    fn split_by_vertex(
        &mut self,
        leaf_node: NodeId,
        vertex: Vertex,
    ) -> Result<(TrapezoidId, TrapezoidId), TriangulateError> {
        let top_trap = self.node_trapezoid(leaf_node)?;

        let below_node = self.nodes.alloc(Node::leaf(top_trap));
        let above_node = self.nodes.alloc(Node::leaf(top_trap));
        let bottom_trap = self.trapezoids.alloc_trapezoid(below_node);
        *self.nodes.node_mut(below_node) = Node::leaf(bottom_trap);
        self.nodes.add_parent(below_node, leaf_node);
        self.nodes.add_parent(above_node, leaf_node);

        // `top_trap` keeps its identity; `bottom_trap` is a duplicate that
        // takes over its old `below` neighbourhood.
        let old_below = self.trapezoids.trapezoid(top_trap).below.clone();
        {
            let dup = self.trapezoids.trapezoid(top_trap).duplicate(below_node);
            *self.trapezoids.trapezoid_mut(bottom_trap) = dup;
        }
        self.trapezoids.trapezoid_mut(bottom_trap).top_vertex = Some(vertex);
        self.trapezoids.trapezoid_mut(bottom_trap).below = old_below.clone();
        for &below in &old_below {
            TrapezoidStore::replace_in(&mut self.trapezoids.trapezoid_mut(below).above, top_trap, bottom_trap);
        }
        self.trapezoids.trapezoid_mut(top_trap).bottom_vertex = Some(vertex);
        self.trapezoids.trapezoid_mut(top_trap).below = vec![bottom_trap];
        self.trapezoids.trapezoid_mut(bottom_trap).above = vec![top_trap];
        self.trapezoids.trapezoid_mut(top_trap).node = above_node;

        *self.nodes.node_mut(leaf_node) = Node {
            kind: NodeKind::Vertex { vertex, below: below_node, above: above_node },
            parents: self.nodes.node(leaf_node).parents.clone(),
        };

        Ok((bottom_trap, top_trap))
    }

    /// Splits the leaf `node` (known to hold `trap`) by `edge` into a left
    /// and right trapezoid. Adjacencies are left untouched here; the caller
    /// (the edge-insertion walk) rewires them once every trapezoid on the
    /// walk has been split.
    fn split_by_edge(
        &mut self,
        node: NodeId,
        trap: TrapezoidId,
        edge: EdgeId,
    ) -> Result<(TrapezoidId, TrapezoidId), TriangulateError> {
        let left_node = self.nodes.alloc(Node::leaf(trap));
        let right_node = self.nodes.alloc(Node::leaf(trap));

        let left_trap = self.trapezoids.alloc_trapezoid(left_node);
        {
            let dup = self.trapezoids.trapezoid(trap).duplicate(left_node);
            *self.trapezoids.trapezoid_mut(left_trap) = dup;
        }
        self.trapezoids.set_right_edge(left_trap, Some(edge));
        self.trapezoids.trapezoid_mut(trap).left_edge = Some(edge);
        self.trapezoids.trapezoid_mut(trap).node = right_node;
        *self.nodes.node_mut(right_node) = Node::leaf(trap);

        self.nodes.add_parent(left_node, node);
        self.nodes.add_parent(right_node, node);

        *self.nodes.node_mut(node) = Node {
            kind: NodeKind::Edge { edge, left: left_node, right: right_node },
            parents: self.nodes.node(node).parents.clone(),
        };

        Ok((left_trap, trap))
    }

    /// Redirects every parent of `old` to point at `new` instead, and folds
    /// `old`'s parents into `new`'s. `old` becomes unreachable; its
    /// trapezoid (if any) is simply left in the arena.
    pub(crate) fn replace_leaf(&mut self, old: NodeId, new: NodeId) -> Result<(), TriangulateError> {
        if old == new {
            return Ok(());
        }
        if !matches!(self.nodes.node(old).kind, NodeKind::Leaf(_)) {
            return Err(TriangulateError::structural(format!(
                "replace_leaf: {old:?} is not a leaf"
            )));
        }
        if !matches!(self.nodes.node(new).kind, NodeKind::Leaf(_)) {
            return Err(TriangulateError::structural(format!(
                "replace_leaf: {new:?} is not a leaf"
            )));
        }
        let parents = self.nodes.node(old).parents.clone();
        for &parent in &parents {
            match &mut self.nodes.node_mut(parent).kind {
                NodeKind::Vertex { below, above, .. } => {
                    if *below == old {
                        *below = new;
                    }
                    if *above == old {
                        *above = new;
                    }
                }
                NodeKind::Edge { left, right, .. } => {
                    if *left == old {
                        *left = new;
                    }
                    if *right == old {
                        *right = new;
                    }
                }
                NodeKind::Leaf(_) => {
                    return Err(TriangulateError::structural(
                        "replace_leaf: a leaf cannot be the parent of another node",
                    ));
                }
            }
        }
        self.nodes.node_mut(new).parents.extend(parents);
        Ok(())
    }

    /// All trapezoids reachable from `node`, found by walking to every leaf.
    pub fn leaves_from(&self, node: NodeId, acc: &mut Vec<TrapezoidId>) {
        match &self.nodes.node(node).kind {
            NodeKind::Leaf(t) => acc.push(*t),
            NodeKind::Vertex { below, above, .. } => {
                self.leaves_from(*below, acc);
                self.leaves_from(*above, acc);
            }
            NodeKind::Edge { left, right, .. } => {
                self.leaves_from(*left, acc);
                self.leaves_from(*right, acc);
            }
        }
    }

    pub fn leaves(&self) -> Vec<TrapezoidId> {
        let mut acc = Vec::new();
        self.leaves_from(self.root, &mut acc);
        acc
    }

    pub fn trapezoid(&self, id: TrapezoidId) -> &Trapezoid {
        self.trapezoids.trapezoid(id)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.trapezoids.edge(id)
    }

    pub fn trapezoids(&self) -> &TrapezoidStore {
        &self.trapezoids
    }

    pub fn trapezoids_mut(&mut self) -> &mut TrapezoidStore {
        &mut self.trapezoids
    }
}

impl Default for SearchDag {
    fn default() -> Self {
        Self::new()
    }
}
