//! Graph node types.
//!
//! Each node has a [`NodeKind`] deciding which way signals may flow through
//! it, a display name, and an ordered list of named parameters that incoming
//! cables can modulate.

use patchbay_core::{NodeHandle, ParameterHandle};

use crate::edge::EdgeId;

/// The role of a node in the routing graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Produces a signal but takes no audio input (oscillators, LFOs).
    Generator,
    /// Takes an input and produces an output (filters, amplifiers).
    Processor,
    /// Consumes a signal without producing one (the speaker output).
    Sink,
}

impl NodeKind {
    /// True if this node can drive other nodes.
    #[inline]
    pub fn has_outputs(self) -> bool {
        !matches!(self, Self::Sink)
    }

    /// True if other nodes can drive this node's input.
    #[inline]
    pub fn has_inputs(self) -> bool {
        !matches!(self, Self::Generator)
    }
}

/// Internal bookkeeping for a node in the graph.
#[derive(Debug)]
pub(crate) struct NodeData {
    pub handle: NodeHandle,
    pub kind: NodeKind,
    pub name: String,
    /// Parameter names, indexed by slot.
    pub params: Vec<String>,
    /// Edges arriving at this node or one of its parameters.
    pub incoming: Vec<EdgeId>,
    /// Edges leaving this node.
    pub outgoing: Vec<EdgeId>,
}

impl NodeData {
    pub fn new(handle: NodeHandle, kind: NodeKind, name: String) -> Self {
        Self {
            handle,
            kind,
            name,
            params: Vec::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Appends a parameter, returning its handle.
    pub fn push_param(&mut self, name: String) -> ParameterHandle {
        let slot = self.params.len() as u32;
        self.params.push(name);
        ParameterHandle::new(self.handle, slot)
    }

    pub fn has_param(&self, slot: u32) -> bool {
        (slot as usize) < self.params.len()
    }
}
