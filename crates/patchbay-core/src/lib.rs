//! Patchbay Core - cable state machine for virtual patch panels
//!
//! Modules on a virtual modular synthesizer expose jacks; the user drags cables
//! between them. This crate owns the part of that interaction that has to be
//! right: which jacks are occupied, how a press/release gesture becomes "start
//! a cable", "finish a cable", "pick up a cable end" or "drop the cable", and
//! keeping all of that in step with the signal graph behind the panel.
//!
//! # Core Abstractions
//!
//! - [`JackRegistry`] - Jack identities, bindings into the graph, and positions
//! - [`PatchState`] - Committed [`Wire`]s plus at most one [`PendingConnection`]
//! - [`PatchController`] - The only mutator of the state; drives the graph
//! - [`SignalGraph`] - Contract the routing engine implements
//! - [`PatchPanel`] - Session object translating pointer events
//!
//! # Invariants
//!
//! - A jack is an end of at most one wire.
//! - The pending cable has exactly one resolved end, never a jack that is
//!   already plugged.
//! - The graph is only touched through the controller, once per committed or
//!   removed wire.
//!
//! # Example
//!
//! ```rust,ignore
//! use patchbay_core::{JackBinding, PatchPanel, Position};
//!
//! let mut panel = PatchPanel::with_graph(graph);
//! let osc_out = panel.register_jack(JackBinding::Source(osc), Position::new(-2.0, 0.75, 0.0));
//! let vcf_in = panel.register_jack(JackBinding::Destination(vcf.into()), Position::new(-2.3, -2.0, 0.0));
//!
//! panel.on_jack_pointer_down(osc_out.id())?;
//! panel.on_jack_pointer_up(vcf_in.id())?;
//! assert!(panel.is_plugged(vcf_in.id()));
//! ```

pub mod cable;
pub mod color;
pub mod controller;
pub mod error;
pub mod event;
pub mod jack;
pub mod panel;
pub mod registry;
pub mod signal;
pub mod state;

pub use cable::CablePath;
pub use color::{ColorTag, ParseColorError, WirePalette, next_color};
pub use controller::{Endpoint, IgnoreReason, PatchController, PlugOutcome, UnplugOutcome};
pub use error::PatchError;
pub use event::{DragState, NavigationGate, PatchEvent, PatchSnapshot};
pub use jack::{JackBinding, JackId, JackRef, JackRole, Position};
pub use panel::{GestureOutcome, PatchPanel};
pub use registry::JackRegistry;
pub use signal::{AdapterError, NodeHandle, ParameterHandle, SignalGraph, TargetHandle};
pub use state::{PatchState, PendingConnection, Wire, WireKey};

/// Re-exported so callers can seed controllers without depending on `rand`.
pub use rand::rngs::StdRng;
