//! Signal graph contract.
//!
//! The patch panel never touches the routing engine directly. Every edge it
//! creates or removes goes through a [`SignalGraph`] implementation owned by the
//! [`PatchController`](crate::PatchController), so the controller's wire set and
//! the engine's topology cannot drift apart.
//!
//! Targets are tagged: a cable always starts at a node output, but it may end
//! either at a node input or at a continuously-modulated parameter of a node.
//! Implementations dispatch on [`TargetHandle`] explicitly.

use thiserror::Error;

/// Handle to a node in the external signal graph.
///
/// Handles are allocated by the graph implementation and are opaque to the
/// patch panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(u32);

impl NodeHandle {
    /// Wraps a raw graph node index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw numeric identifier.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Handle to a parameter owned by a node in the external signal graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterHandle {
    node: NodeHandle,
    slot: u32,
}

impl ParameterHandle {
    /// Creates a handle for parameter `slot` of `node`.
    #[inline]
    pub const fn new(node: NodeHandle, slot: u32) -> Self {
        Self { node, slot }
    }

    /// The node owning this parameter.
    #[inline]
    pub const fn node(self) -> NodeHandle {
        self.node
    }

    /// Index of the parameter within its node.
    #[inline]
    pub const fn slot(self) -> u32 {
        self.slot
    }
}

impl core::fmt::Display for ParameterHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.param[{}]", self.node, self.slot)
    }
}

/// What a cable end is bound to in the signal graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetHandle {
    /// A node's audio input (or output, for source jacks).
    Node(NodeHandle),
    /// A node parameter driven by the incoming signal.
    Parameter(ParameterHandle),
}

impl TargetHandle {
    /// Returns the node handle when this target is a node.
    pub fn as_node(self) -> Option<NodeHandle> {
        match self {
            Self::Node(node) => Some(node),
            Self::Parameter(_) => None,
        }
    }

    /// The node that owns this target.
    pub fn owner(self) -> NodeHandle {
        match self {
            Self::Node(node) => node,
            Self::Parameter(param) => param.node(),
        }
    }
}

impl From<NodeHandle> for TargetHandle {
    fn from(node: NodeHandle) -> Self {
        Self::Node(node)
    }
}

impl From<ParameterHandle> for TargetHandle {
    fn from(param: ParameterHandle) -> Self {
        Self::Parameter(param)
    }
}

impl core::fmt::Display for TargetHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Node(node) => core::fmt::Display::fmt(node, f),
            Self::Parameter(param) => core::fmt::Display::fmt(param, f),
        }
    }
}

/// Failures reported by a [`SignalGraph`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// The source cannot drive the destination's kind at all.
    ///
    /// Correct module definitions never produce this; it points at a wiring
    /// bug in module code.
    #[error("{from} cannot drive {to}")]
    TypeMismatch {
        /// Driving node.
        from: NodeHandle,
        /// Rejected destination.
        to: TargetHandle,
    },

    /// The edge was already gone when `disconnect` was called.
    #[error("no edge from {from} to {to}")]
    AlreadyDisconnected {
        /// Driving node.
        from: NodeHandle,
        /// Destination of the missing edge.
        to: TargetHandle,
    },

    /// The node does not exist in the graph.
    #[error("unknown node {0}")]
    UnknownNode(NodeHandle),

    /// The parameter does not exist on its node.
    #[error("unknown parameter {0}")]
    UnknownParameter(ParameterHandle),
}

impl AdapterError {
    /// True for the benign "edge already absent" report.
    pub fn is_already_disconnected(&self) -> bool {
        matches!(self, Self::AlreadyDisconnected { .. })
    }
}

/// Connect/disconnect primitives of the routing engine behind the panel.
pub trait SignalGraph {
    /// Adds an edge from `source` to `dest`, dispatching on the kind of `dest`.
    fn connect(&mut self, source: NodeHandle, dest: TargetHandle) -> Result<(), AdapterError>;

    /// Removes the edge from `source` to `dest`.
    ///
    /// Must report [`AdapterError::AlreadyDisconnected`] rather than fail hard
    /// when the edge was removed by other means.
    fn disconnect(&mut self, source: NodeHandle, dest: TargetHandle) -> Result<(), AdapterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_owner_resolves_parameter_node() {
        let node = NodeHandle::new(3);
        let param = ParameterHandle::new(node, 1);
        assert_eq!(TargetHandle::from(param).owner(), node);
        assert_eq!(TargetHandle::from(node).owner(), node);
        assert_eq!(TargetHandle::from(param).as_node(), None);
    }

    #[test]
    fn display_formats() {
        let node = NodeHandle::new(7);
        assert_eq!(node.to_string(), "node#7");
        assert_eq!(ParameterHandle::new(node, 2).to_string(), "node#7.param[2]");
    }

    #[test]
    fn type_mismatch_display() {
        let err = AdapterError::TypeMismatch {
            from: NodeHandle::new(1),
            to: TargetHandle::Node(NodeHandle::new(2)),
        };
        assert_eq!(err.to_string(), "node#1 cannot drive node#2");
        assert!(!err.is_already_disconnected());
    }
}
