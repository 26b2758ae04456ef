use crate::geometry::Vertex;
use crate::ids::{EdgeId, NodeId, NodeIdFactory, TrapezoidId};

/// One node of the search DAG: a trapezoid leaf, or an inner node that
/// branches on a vertex (above/below) or an edge (left/right of it).
///
/// A node starts life as a leaf and is transmuted in place into an inner
/// node when its trapezoid is split — there is no separate "replace this
/// node" step for that case, only for merges (see
/// [`crate::dag::replace_leaf`]), which is why `parents` is tracked
/// explicitly rather than assumed to be a single slot.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Leaf(TrapezoidId),
    Vertex {
        vertex: Vertex,
        below: NodeId,
        above: NodeId,
    },
    Edge {
        edge: EdgeId,
        left: NodeId,
        right: NodeId,
    },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parents: Vec<NodeId>,
}

impl Node {
    pub fn leaf(trap: TrapezoidId) -> Self {
        Self {
            kind: NodeKind::Leaf(trap),
            parents: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct NodeStore {
    nodes: Vec<Node>,
    ids: NodeIdFactory,
}

impl NodeStore {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            ids: NodeIdFactory::new(),
        }
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = self.ids.one_more();
        debug_assert_eq!(id.0, self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn add_parent(&mut self, child: NodeId, parent: NodeId) {
        self.nodes[child.0].parents.push(parent);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}
