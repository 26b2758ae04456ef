//! Stable integer identifiers for the arenas owned by a [`crate::dag::SearchDag`].
//!
//! The trapezoidal decomposition is an inherently cyclic object graph: nodes
//! point at their children and their trapezoid; trapezoids point at their
//! neighbours and their owning node. Rather than encode that with `Rc`/`Weak`
//! cycles, every object lives in an append-only arena and is addressed by one
//! of these newtypes, following the id/factory split used throughout this
//! crate's graph types.

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct TrapezoidId(pub usize);

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

macro_rules! id_factory {
    ($factory:ident, $id:ident) => {
        #[derive(Clone, Debug, Default)]
        pub struct $factory(usize);

        impl $factory {
            pub fn new() -> Self {
                Self(0)
            }

            pub fn one_more(&mut self) -> $id {
                let cur = self.0;
                self.0 += 1;
                $id(cur)
            }

            pub fn count(&self) -> usize {
                self.0
            }
        }
    };
}

id_factory!(NodeIdFactory, NodeId);
id_factory!(TrapezoidIdFactory, TrapezoidId);
id_factory!(EdgeIdFactory, EdgeId);
