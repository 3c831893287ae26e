//! Patchbay Graph - in-memory routing graph for virtual patch panels
//!
//! [`RoutingGraph`] is the topology behind a panel: generator, processor and
//! sink nodes, the named parameters they expose, and the edges cables create
//! between them. It implements [`SignalGraph`](patchbay_core::SignalGraph), so
//! it can be handed straight to a
//! [`PatchController`](patchbay_core::PatchController).
//!
//! # Example
//!
//! ```rust
//! use patchbay_core::{JackBinding, PatchPanel, Position};
//! use patchbay_graph::RoutingGraph;
//!
//! let mut graph = RoutingGraph::new();
//! let vco = graph.add_generator("vco");
//! let vcf = graph.add_processor("vcf");
//!
//! let mut panel = PatchPanel::with_graph(graph);
//! let out = panel.register_jack(JackBinding::Source(vco), Position::default());
//! let inp = panel.register_jack(JackBinding::Destination(vcf.into()), Position::default());
//!
//! panel.on_jack_pointer_down(out.id()).unwrap();
//! panel.on_jack_pointer_up(inp.id()).unwrap();
//! assert!(panel.controller().graph().is_connected(vco, vcf));
//! ```

pub mod edge;
pub mod node;
mod routing;

pub use edge::EdgeId;
pub use node::NodeKind;
pub use routing::{GraphError, RoutingGraph};
