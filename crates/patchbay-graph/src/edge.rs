//! Graph edge types.
//!
//! An `Edge` carries a signal from a node output to a node input or to one of
//! the node's parameters. Edges are reference-counted: patching the same pair
//! twice yields one edge with a count of two.

use patchbay_core::{NodeHandle, TargetHandle};

/// Unique identifier for an edge in the routing graph.
///
/// Edge IDs are assigned sequentially and never reused within a graph instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) u32);

impl EdgeId {
    /// Returns the raw numeric identifier.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// A directed connection in the routing graph.
#[derive(Debug)]
pub(crate) struct Edge {
    pub from: NodeHandle,
    pub to: TargetHandle,
    /// Number of cables currently realizing this edge. Never zero while the
    /// edge is stored.
    pub count: u32,
}
