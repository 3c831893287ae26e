//! Scripted patching session on a small synth voice.
//!
//! Builds LFO, VCO, filter, amp and output modules, patches a voice, moves a
//! cable to the amp's gain, and prints every change notification. Set
//! `RUST_LOG` or the config file's `log_filter` to see the controller's logs.
//!
//! Run with: `cargo run -p patchbay-graph --example panel_session`
#![allow(missing_docs)]

use patchbay_config::PanelConfig;
use patchbay_core::{JackBinding, PatchEvent, PatchPanel, Position};
use patchbay_graph::RoutingGraph;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PanelConfig::load_or_default()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let mut graph = RoutingGraph::new();
    let lfo = graph.add_generator("LFO");
    let vco = graph.add_generator("VCO1");
    let vcf = graph.add_processor("Filter");
    let cutoff = graph.add_param(vcf, "cutoff")?;
    let amp = graph.add_processor("Amp");
    let gain = graph.add_param(amp, "gain")?;
    let out = graph.add_sink("Output");

    let mut panel = PatchPanel::new(config.controller(graph)?);
    let events = panel.subscribe();

    let lfo_out = panel.register_jack(JackBinding::Source(lfo), Position::new(-3.5, 0.2, 0.0));
    let vco_out = panel.register_jack(JackBinding::Source(vco), Position::new(-2.0, 0.2, 0.0));
    let vcf_in = panel.register_jack(
        JackBinding::Destination(vcf.into()),
        Position::new(-2.6, -1.6, 0.0),
    );
    let vcf_cutoff = panel.register_jack(
        JackBinding::Destination(cutoff.into()),
        Position::new(-2.0, -1.6, 0.0),
    );
    let vcf_out = panel.register_jack(JackBinding::Source(vcf), Position::new(-2.3, -2.4, 0.0));
    let amp_in = panel.register_jack(
        JackBinding::Destination(amp.into()),
        Position::new(2.5, 0.75, 0.0),
    );
    let amp_gain = panel.register_jack(
        JackBinding::Destination(gain.into()),
        Position::new(2.8, 0.75, 0.0),
    );
    let amp_out = panel.register_jack(JackBinding::Source(amp), Position::new(3.1, 0.75, 0.0));
    let out_in = panel.register_jack(
        JackBinding::Destination(out.into()),
        Position::new(4.2, -0.25, 0.0),
    );

    // Patch the voice: VCO -> VCF -> Amp -> Output, LFO sweeping the cutoff.
    for (from, to) in [
        (vco_out, vcf_in),
        (vcf_out, amp_in),
        (amp_out, out_in),
        (lfo_out, vcf_cutoff),
    ] {
        panel.on_jack_pointer_down(from.id())?;
        panel.on_jack_pointer_up(to.id())?;
    }

    // Move the LFO cable from the cutoff to the amp's gain (tremolo).
    panel.on_jack_pointer_down(vcf_cutoff.id())?;
    if let Some(preview) = panel.snapshot().preview(Position::new(0.5, 0.0, 0.0)) {
        println!(
            "dragging cable from {:?}, span {:.2}",
            preview.start(),
            preview.span()
        );
    }
    panel.on_jack_pointer_up(amp_gain.id())?;

    // Start a cable and drop it on the background.
    panel.on_jack_pointer_down(vcf_cutoff.id())?;
    panel.on_background_pointer_up();

    for event in events.try_iter() {
        match event {
            PatchEvent::Changed(snapshot) => {
                println!(
                    "{} wire(s){}",
                    snapshot.wires.len(),
                    if snapshot.pending.is_some() {
                        ", cable in hand"
                    } else {
                        ""
                    }
                );
            }
            PatchEvent::Drag(state) => println!("drag: {state:?}"),
        }
    }

    let snapshot = panel.snapshot();
    for wire in &snapshot.wires {
        println!("{} {}", wire.key(), wire.color());
    }

    let (_, controller) = panel.into_parts();
    let graph = controller.into_graph();
    for (name, node) in [("LFO", lfo), ("VCO1", vco), ("Filter", vcf), ("Amp", amp)] {
        let targets: Vec<String> = graph.downstream(node).iter().map(ToString::to_string).collect();
        println!("{name} -> [{}]", targets.join(", "));
    }

    Ok(())
}
