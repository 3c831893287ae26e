//! Routing graph: node and parameter registration, edge mutation, and the
//! [`SignalGraph`] adapter the patch controller drives.
//!
//! Unlike an audio processing DAG, a patch panel allows feedback: a VCO can
//! modulate its own pitch through an LFO that it also drives. No cycle check
//! is performed.

use patchbay_core::{AdapterError, NodeHandle, ParameterHandle, SignalGraph, TargetHandle};
use thiserror::Error;

use crate::edge::{Edge, EdgeId};
use crate::node::{NodeData, NodeKind};

/// Errors that can occur during graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The specified node was not found in the graph.
    #[error("node {0} not found")]
    NodeNotFound(NodeHandle),

    /// The node exists but has no such parameter.
    #[error("parameter {0} not found")]
    ParameterNotFound(ParameterHandle),

    /// The node cannot drive anything (a sink).
    #[error("{0} has no outputs")]
    NoOutputs(NodeHandle),

    /// The node cannot be driven (a generator's audio input).
    #[error("{0} has no inputs")]
    NoInputs(NodeHandle),

    /// No edge exists between the pair.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound {
        /// Driving node.
        from: NodeHandle,
        /// Driven node or parameter.
        to: TargetHandle,
    },
}

/// In-memory signal routing graph.
///
/// # Usage
///
/// 1. Create a graph with [`new()`](Self::new)
/// 2. Add nodes: [`add_generator()`](Self::add_generator),
///    [`add_processor()`](Self::add_processor), [`add_sink()`](Self::add_sink)
/// 3. Expose modulatable parameters: [`add_param()`](Self::add_param)
/// 4. Hand the graph to a [`PatchController`](patchbay_core::PatchController),
///    which calls [`connect()`](Self::connect) and
///    [`disconnect()`](Self::disconnect) as cables are patched
#[derive(Debug, Default)]
pub struct RoutingGraph {
    nodes: Vec<Option<NodeData>>,
    edges: Vec<Option<Edge>>,
    next_node_slot: u32,
    next_edge_slot: u32,
}

impl RoutingGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Node mutations ---

    /// Adds a node producing a signal with no audio input.
    pub fn add_generator(&mut self, name: impl Into<String>) -> NodeHandle {
        self.add_node(NodeKind::Generator, name)
    }

    /// Adds a node with both an input and an output.
    pub fn add_processor(&mut self, name: impl Into<String>) -> NodeHandle {
        self.add_node(NodeKind::Processor, name)
    }

    /// Adds a terminal node.
    pub fn add_sink(&mut self, name: impl Into<String>) -> NodeHandle {
        self.add_node(NodeKind::Sink, name)
    }

    /// Adds a node of `kind`. Returns the new node's handle.
    pub fn add_node(&mut self, kind: NodeKind, name: impl Into<String>) -> NodeHandle {
        let handle = NodeHandle::new(self.next_node_slot);
        self.next_node_slot += 1;
        let name = name.into();
        tracing::debug!(%handle, ?kind, %name, "graph_add");

        let idx = handle.index() as usize;
        if idx >= self.nodes.len() {
            self.nodes.resize_with(idx + 1, || None);
        }
        self.nodes[idx] = Some(NodeData::new(handle, kind, name));
        handle
    }

    /// Exposes a named parameter on `node` as a cable target.
    pub fn add_param(
        &mut self,
        node: NodeHandle,
        name: impl Into<String>,
    ) -> Result<ParameterHandle, GraphError> {
        let data = self.node_mut(node)?;
        let param = data.push_param(name.into());
        tracing::debug!(%param, "graph_add_param");
        Ok(param)
    }

    /// Removes a node and every edge touching it or its parameters.
    pub fn remove_node(&mut self, node: NodeHandle) -> Result<(), GraphError> {
        let data = self.get_node(node)?;
        let edge_ids: Vec<EdgeId> = data
            .incoming
            .iter()
            .chain(data.outgoing.iter())
            .copied()
            .collect();
        for edge_id in edge_ids {
            self.remove_edge(edge_id);
        }
        self.nodes[node.index() as usize] = None;
        tracing::debug!(%node, "graph_remove");
        Ok(())
    }

    // --- Edge mutations ---

    /// Routes `from`'s output into `to`.
    ///
    /// Connecting a pair that is already connected bumps the edge's count and
    /// returns the existing ID. Fails if either end is unknown or if the
    /// nodes' kinds forbid the direction.
    pub fn connect(
        &mut self,
        from: NodeHandle,
        to: impl Into<TargetHandle>,
    ) -> Result<EdgeId, GraphError> {
        let to = to.into();
        self.validate_connection(from, to)?;

        if let Some(edge_id) = self.find_edge(from, to)
            && let Some(edge) = self.edges[edge_id.0 as usize].as_mut()
        {
            edge.count += 1;
            tracing::debug!(%from, %to, count = edge.count, "graph_connect: shared edge");
            return Ok(edge_id);
        }

        let edge_id = EdgeId(self.next_edge_slot);
        self.next_edge_slot += 1;

        let idx = edge_id.0 as usize;
        if idx >= self.edges.len() {
            self.edges.resize_with(idx + 1, || None);
        }
        self.edges[idx] = Some(Edge { from, to, count: 1 });

        // Both nodes were validated above.
        if let Some(node) = self.node_slot_mut(from) {
            node.outgoing.push(edge_id);
        }
        if let Some(node) = self.node_slot_mut(to.owner()) {
            node.incoming.push(edge_id);
        }

        tracing::debug!(%from, %to, %edge_id, "graph_connect");
        Ok(edge_id)
    }

    /// Drops one reference to the edge from `from` to `to`; the edge itself
    /// goes away with its last reference.
    pub fn disconnect(
        &mut self,
        from: NodeHandle,
        to: impl Into<TargetHandle>,
    ) -> Result<(), GraphError> {
        let to = to.into();
        let edge_id = self
            .find_edge(from, to)
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        let remaining = match self.edges[edge_id.0 as usize].as_mut() {
            Some(edge) => {
                edge.count -= 1;
                edge.count
            }
            None => return Err(GraphError::EdgeNotFound { from, to }),
        };
        if remaining == 0 {
            self.remove_edge(edge_id);
        }
        tracing::debug!(%from, %to, remaining, "graph_disconnect");
        Ok(())
    }

    // --- Queries ---

    /// Kind of `node`, if it exists.
    pub fn kind(&self, node: NodeHandle) -> Option<NodeKind> {
        self.get_node(node).ok().map(|n| n.kind)
    }

    /// Display name of `node`, if it exists.
    pub fn name(&self, node: NodeHandle) -> Option<&str> {
        self.get_node(node).ok().map(|n| n.name.as_str())
    }

    /// Display name of `param`, if it exists.
    pub fn param_name(&self, param: ParameterHandle) -> Option<&str> {
        let node = self.get_node(param.node()).ok()?;
        node.params.get(param.slot() as usize).map(String::as_str)
    }

    /// Finds the edge connecting `from` to `to`, if one exists.
    pub fn find_edge(&self, from: NodeHandle, to: TargetHandle) -> Option<EdgeId> {
        let node = self.nodes.get(from.index() as usize)?.as_ref()?;
        node.outgoing.iter().copied().find(|edge_id| {
            self.edges[edge_id.0 as usize]
                .as_ref()
                .is_some_and(|edge| edge.to == to)
        })
    }

    /// Number of cables realizing the edge from `from` to `to` (zero if none).
    pub fn connection_count(&self, from: NodeHandle, to: impl Into<TargetHandle>) -> u32 {
        self.find_edge(from, to.into())
            .and_then(|id| self.edges[id.0 as usize].as_ref())
            .map_or(0, |edge| edge.count)
    }

    /// True if `from` currently drives `to`.
    pub fn is_connected(&self, from: NodeHandle, to: impl Into<TargetHandle>) -> bool {
        self.connection_count(from, to) > 0
    }

    /// Everything `node` drives, in connection order.
    pub fn downstream(&self, node: NodeHandle) -> Vec<TargetHandle> {
        let Ok(data) = self.get_node(node) else {
            return Vec::new();
        };
        data.outgoing
            .iter()
            .filter_map(|id| self.edges[id.0 as usize].as_ref())
            .map(|edge| edge.to)
            .collect()
    }

    /// Returns the number of active (non-removed) nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns the number of active edges. Shared edges count once.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_some()).count()
    }

    // --- Internal helpers ---

    fn get_node(&self, node: NodeHandle) -> Result<&NodeData, GraphError> {
        self.nodes
            .get(node.index() as usize)
            .and_then(|n| n.as_ref())
            .ok_or(GraphError::NodeNotFound(node))
    }

    fn node_mut(&mut self, node: NodeHandle) -> Result<&mut NodeData, GraphError> {
        self.node_slot_mut(node).ok_or(GraphError::NodeNotFound(node))
    }

    fn node_slot_mut(&mut self, node: NodeHandle) -> Option<&mut NodeData> {
        self.nodes.get_mut(node.index() as usize)?.as_mut()
    }

    /// Validates that `from` may drive `to`.
    fn validate_connection(&self, from: NodeHandle, to: TargetHandle) -> Result<(), GraphError> {
        let from_node = self.get_node(from)?;
        if !from_node.kind.has_outputs() {
            return Err(GraphError::NoOutputs(from));
        }

        match to {
            TargetHandle::Node(node) => {
                if !self.get_node(node)?.kind.has_inputs() {
                    return Err(GraphError::NoInputs(node));
                }
            }
            // Any node kind may expose parameters, generators included.
            TargetHandle::Parameter(param) => {
                if !self.get_node(param.node())?.has_param(param.slot()) {
                    return Err(GraphError::ParameterNotFound(param));
                }
            }
        }
        Ok(())
    }

    /// Removes an edge regardless of its count.
    fn remove_edge(&mut self, id: EdgeId) {
        let idx = id.0 as usize;
        if let Some(edge) = self.edges[idx].take() {
            if let Some(node) = self.node_slot_mut(edge.from) {
                node.outgoing.retain(|e| *e != id);
            }
            if let Some(node) = self.node_slot_mut(edge.to.owner()) {
                node.incoming.retain(|e| *e != id);
            }
        }
    }
}

/// Maps a graph failure on the pair `from → to` into the adapter contract.
fn adapt(from: NodeHandle, to: TargetHandle, err: GraphError) -> AdapterError {
    match err {
        GraphError::NodeNotFound(node) => AdapterError::UnknownNode(node),
        GraphError::ParameterNotFound(param) => AdapterError::UnknownParameter(param),
        GraphError::NoOutputs(_) | GraphError::NoInputs(_) => AdapterError::TypeMismatch { from, to },
        GraphError::EdgeNotFound { .. } => AdapterError::AlreadyDisconnected { from, to },
    }
}

impl SignalGraph for RoutingGraph {
    fn connect(&mut self, source: NodeHandle, dest: TargetHandle) -> Result<(), AdapterError> {
        RoutingGraph::connect(self, source, dest)
            .map(|_| ())
            .map_err(|e| adapt(source, dest, e))
    }

    fn disconnect(&mut self, source: NodeHandle, dest: TargetHandle) -> Result<(), AdapterError> {
        RoutingGraph::disconnect(self, source, dest).map_err(|e| adapt(source, dest, e))
    }
}
