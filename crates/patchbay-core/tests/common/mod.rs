//! Shared fixtures for patchbay-core integration tests.
#![allow(dead_code)]

use patchbay_core::{AdapterError, NodeHandle, SignalGraph, TargetHandle};

/// A call made by the controller into the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Connect(NodeHandle, TargetHandle),
    Disconnect(NodeHandle, TargetHandle),
}

/// Signal graph that records every call and tracks live edges.
#[derive(Debug, Default)]
pub struct RecordingGraph {
    pub calls: Vec<Call>,
    pub edges: Vec<(NodeHandle, TargetHandle)>,
    /// When set, the engine drops every edge right after creating it.
    pub volatile: bool,
}

impl RecordingGraph {
    pub fn connects(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Connect(..)))
            .count()
    }

    pub fn disconnects(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Disconnect(..)))
            .count()
    }
}

impl SignalGraph for RecordingGraph {
    fn connect(&mut self, source: NodeHandle, dest: TargetHandle) -> Result<(), AdapterError> {
        self.calls.push(Call::Connect(source, dest));
        if !self.volatile {
            self.edges.push((source, dest));
        }
        Ok(())
    }

    fn disconnect(&mut self, source: NodeHandle, dest: TargetHandle) -> Result<(), AdapterError> {
        self.calls.push(Call::Disconnect(source, dest));
        match self.edges.iter().position(|e| *e == (source, dest)) {
            Some(idx) => {
                self.edges.remove(idx);
                Ok(())
            }
            None => Err(AdapterError::AlreadyDisconnected {
                from: source,
                to: dest,
            }),
        }
    }
}

/// Asserts the connection-state invariants.
pub fn assert_invariants(state: &patchbay_core::PatchState) {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for wire in state.wires() {
        assert_ne!(wire.source().id(), wire.dest().id(), "self-wire {}", wire.key());
        assert_eq!(wire.source().role(), patchbay_core::JackRole::Source);
        assert_eq!(wire.dest().role(), patchbay_core::JackRole::Destination);
        assert!(seen.insert(wire.source().id()), "{} in two wires", wire.source().id());
        assert!(seen.insert(wire.dest().id()), "{} in two wires", wire.dest().id());
    }
    if let Some(pending) = state.pending() {
        let ends = usize::from(pending.source().is_some()) + usize::from(pending.dest().is_some());
        assert_eq!(ends, 1, "pending cable must have exactly one end");
        let anchor = pending.anchor().expect("one end");
        assert!(!seen.contains(&anchor.id()), "pending end {} is plugged", anchor.id());
    }
}
