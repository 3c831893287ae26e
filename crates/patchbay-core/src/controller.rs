//! Patch controller: the cable state machine.
//!
//! [`PatchController`] is the only mutator of [`PatchState`] and the only caller
//! of the [`SignalGraph`] it owns. Its three operations map onto the two-phase
//! pointer gesture:
//!
//! | operation                                        | gesture                                     |
//! |--------------------------------------------------|---------------------------------------------|
//! | [`attempt_plug()`](PatchController::attempt_plug) | press or release over a free jack          |
//! | [`unplug()`](PatchController::unplug)             | press over a plugged jack (pick up the end) |
//! | [`cancel_pending()`](PatchController::cancel_pending) | release over empty space               |
//!
//! Every operation leaves the state invariants intact (see [`crate::state`]).
//! After each change the controller publishes a [`PatchEvent`] to subscribers.

use crossbeam_channel::Receiver;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::{ColorTag, WirePalette, next_color};
use crate::error::PatchError;
use crate::event::{DragState, NavigationGate, PatchEvent, PatchSnapshot, Subscribers};
use crate::jack::{JackId, JackRef, JackRole};
use crate::signal::{AdapterError, SignalGraph};
use crate::state::{PatchState, PendingConnection, Wire, WireKey};

/// A jack offered to [`PatchController::attempt_plug`], tagged with the cable
/// slot it should fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Endpoint {
    slot: JackRole,
    jack: JackRef,
    color: Option<ColorTag>,
}

impl Endpoint {
    /// Offers `jack` in the slot matching its own role.
    pub fn of(jack: JackRef) -> Self {
        Self {
            slot: jack.role(),
            jack,
            color: None,
        }
    }

    /// Offers `jack` as the cable's source end.
    pub fn source(jack: JackRef) -> Self {
        Self {
            slot: JackRole::Source,
            jack,
            color: None,
        }
    }

    /// Offers `jack` as the cable's destination end.
    pub fn dest(jack: JackRef) -> Self {
        Self {
            slot: JackRole::Destination,
            jack,
            color: None,
        }
    }

    /// Requests a specific cable color, overriding the pending one.
    pub fn with_color(mut self, color: ColorTag) -> Self {
        self.color = Some(color);
        self
    }

    /// The offered jack.
    pub fn jack(&self) -> &JackRef {
        &self.jack
    }

    /// The slot the jack is offered for.
    pub fn slot(&self) -> JackRole {
        self.slot
    }
}

/// Why [`PatchController::attempt_plug`] left the state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The jack already carries a wire.
    RedundantPlug,
    /// Source and destination resolved to the same jack.
    SelfConnection,
    /// The endpoint was tagged for a slot its jack's role cannot fill.
    RoleMismatch,
}

/// Result of [`PatchController::attempt_plug`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlugOutcome {
    /// One cable end is resolved and the other follows the pointer.
    Pending,
    /// A wire was committed.
    Committed(WireKey),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Result of [`PatchController::unplug`].
#[derive(Clone, Debug, PartialEq)]
pub enum UnplugOutcome {
    /// The wire was removed; its surviving end is now the pending cable.
    PickedUp(Wire),
    /// The jack carried no wire (caller contract violation, release builds only).
    NotPlugged,
}

/// The cable state machine.
///
/// Owns the connection state, the signal graph adapter, and the color source.
pub struct PatchController<G: SignalGraph> {
    state: PatchState,
    graph: G,
    palette: WirePalette,
    rng: StdRng,
    subscribers: Subscribers,
    /// Drag state last announced to subscribers.
    drag: DragState,
    navigation_held: bool,
}

impl<G: SignalGraph> PatchController<G> {
    /// Creates a controller over `graph` with the default palette and an
    /// entropy-seeded color source.
    pub fn new(graph: G) -> Self {
        Self::with_colors(graph, WirePalette::default(), StdRng::from_entropy())
    }

    /// Creates a controller with an explicit palette and color source.
    pub fn with_colors(graph: G, palette: WirePalette, rng: StdRng) -> Self {
        Self {
            state: PatchState::new(),
            graph,
            palette,
            rng,
            subscribers: Subscribers::default(),
            drag: DragState::Idle,
            navigation_held: false,
        }
    }

    /// Creates a controller whose colors are reproducible from `seed`.
    pub fn seeded(graph: G, palette: WirePalette, seed: u64) -> Self {
        Self::with_colors(graph, palette, StdRng::seed_from_u64(seed))
    }

    // --- Gesture operations ---

    /// Offers one cable end.
    ///
    /// - Plugged jack: ignored ([`IgnoreReason::RedundantPlug`]).
    /// - Completes a source/destination pair of distinct jacks: the graph is
    ///   connected, the wire committed, and the drag ends.
    /// - Same jack at both ends: ignored ([`IgnoreReason::SelfConnection`]),
    ///   the pending cable is kept.
    /// - Otherwise the merged end becomes the pending cable and the drag is
    ///   active.
    ///
    /// The cable color is the endpoint's color, else the pending cable's,
    /// else a fresh draw from the palette.
    ///
    /// # Errors
    ///
    /// [`PatchError::Connect`] if the graph refuses the edge. The state is left
    /// as it was before the call.
    pub fn attempt_plug(&mut self, endpoint: Endpoint) -> Result<PlugOutcome, PatchError> {
        let jack = endpoint.jack;
        if self.state.is_plugged(jack.id()) {
            tracing::trace!(jack = %jack.id(), "plug ignored: jack already plugged");
            return Ok(PlugOutcome::Ignored(IgnoreReason::RedundantPlug));
        }

        let previous = self.state.pending().cloned();
        let (mut source, mut dest) = previous
            .as_ref()
            .map_or((None, None), |p| (p.source, p.dest));
        match endpoint.slot {
            JackRole::Source => source = Some(jack),
            JackRole::Destination => dest = Some(jack),
        }

        if let (Some(s), Some(d)) = (source, dest)
            && s.id() == d.id()
        {
            tracing::trace!(jack = %jack.id(), "plug ignored: self-connection");
            return Ok(PlugOutcome::Ignored(IgnoreReason::SelfConnection));
        }
        if endpoint.slot != jack.role() {
            tracing::trace!(jack = %jack.id(), slot = ?endpoint.slot, "plug ignored: role mismatch");
            return Ok(PlugOutcome::Ignored(IgnoreReason::RoleMismatch));
        }

        let color = match (endpoint.color, previous.as_ref()) {
            (Some(color), _) => color,
            (None, Some(pending)) => pending.color,
            (None, None) => next_color(&self.palette, &mut self.rng),
        };

        match (source, dest) {
            (Some(source), Some(dest)) => self.commit(source, dest, color),
            (source, dest) => {
                self.state.set_pending(Some(PendingConnection {
                    source,
                    dest,
                    color,
                }));
                tracing::debug!(jack = %jack.id(), %color, "cable end picked");
                self.publish();
                Ok(PlugOutcome::Pending)
            }
        }
    }

    /// Pulls the cable out of `jack`.
    ///
    /// The graph edge is removed (an "already disconnected" report is
    /// tolerated), the wire is dropped, and the cable's other end becomes the
    /// pending cable with the wire's color, ready to be plugged elsewhere.
    ///
    /// Calling this for a jack without a wire is a contract violation: it
    /// panics in debug builds and is a logged no-op in release builds.
    pub fn unplug(&mut self, jack: JackId) -> UnplugOutcome {
        let Some(wire) = self.state.wire_for(jack).cloned() else {
            if cfg!(debug_assertions) {
                panic!("unplug called for {jack}, which carries no wire");
            }
            tracing::warn!(%jack, "unplug ignored: jack carries no wire");
            return UnplugOutcome::NotPlugged;
        };

        match self.graph.disconnect(wire.source_node(), wire.dest().target()) {
            Ok(()) => {}
            Err(AdapterError::AlreadyDisconnected { .. }) => {
                tracing::debug!(wire = %wire.key(), "edge was already gone");
            }
            Err(e) => {
                tracing::error!(wire = %wire.key(), error = %e, "disconnect failed; dropping wire");
            }
        }
        self.state.remove_wire(wire.key());

        let pending = if wire.dest().id() == jack {
            PendingConnection::from_source(*wire.source(), wire.color())
        } else {
            PendingConnection::from_dest(*wire.dest(), wire.color())
        };
        if self.state.is_dragging() {
            tracing::trace!("discarding previous pending cable");
        }
        self.state.set_pending(Some(pending));
        tracing::debug!(wire = %wire.key(), %jack, "wire unplugged");
        self.publish();
        UnplugOutcome::PickedUp(wire)
    }

    /// Drops the cable in hand. Returns `false` if there was none.
    pub fn cancel_pending(&mut self) -> bool {
        if !self.state.is_dragging() {
            return false;
        }
        self.state.set_pending(None);
        tracing::debug!("pending cable dropped");
        self.publish();
        true
    }

    // --- Queries ---

    /// Current connection state.
    pub fn state(&self) -> &PatchState {
        &self.state
    }

    /// Copy of the current state for drawing.
    pub fn snapshot(&self) -> PatchSnapshot {
        PatchSnapshot::capture(&self.state)
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Read access to the signal graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Consumes the controller, returning the signal graph.
    pub fn into_graph(self) -> G {
        self.graph
    }

    /// The palette new cables draw their colors from.
    pub fn palette(&self) -> &WirePalette {
        &self.palette
    }

    /// Receives a [`PatchEvent`] after every change.
    pub fn subscribe(&mut self) -> Receiver<PatchEvent> {
        self.subscribers.subscribe()
    }

    // --- Navigation ---

    /// Whether camera navigation may react to the pointer.
    pub fn navigation(&self) -> NavigationGate {
        NavigationGate {
            dragging: self.state.is_dragging(),
            held: self.navigation_held,
        }
    }

    /// Claims or releases navigation for another control (e.g. a knob).
    pub fn set_navigation_hold(&mut self, held: bool) {
        self.navigation_held = held;
    }

    // --- Internal helpers ---

    fn commit(
        &mut self,
        source: JackRef,
        dest: JackRef,
        color: ColorTag,
    ) -> Result<PlugOutcome, PatchError> {
        let Some(wire) = Wire::new(source, dest, color) else {
            return Ok(PlugOutcome::Ignored(IgnoreReason::RoleMismatch));
        };

        if let Err(cause) = self.graph.connect(wire.source_node(), dest.target()) {
            tracing::error!(
                from = %source.id(),
                to = %dest.id(),
                error = %cause,
                "signal graph refused wire"
            );
            return Err(PatchError::Connect {
                from: source.id(),
                to: dest.id(),
                cause,
            });
        }

        let key = self.state.insert_wire(wire);
        self.state.set_pending(None);
        tracing::debug!(wire = %key, %color, "wire committed");
        self.publish();
        Ok(PlugOutcome::Committed(key))
    }

    /// Announces the new state, plus a drag event if the drag state flipped.
    fn publish(&mut self) {
        let snapshot = PatchSnapshot::capture(&self.state);
        let drag = snapshot.drag;
        self.subscribers.publish(&PatchEvent::Changed(snapshot));
        if drag != self.drag {
            self.drag = drag;
            self.subscribers.publish(&PatchEvent::Drag(drag));
        }
    }
}

impl<G: SignalGraph + core::fmt::Debug> core::fmt::Debug for PatchController<G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PatchController")
            .field("state", &self.state)
            .field("graph", &self.graph)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jack::{JackBinding, Position};
    use crate::registry::JackRegistry;
    use crate::signal::{NodeHandle, ParameterHandle, TargetHandle};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Connect(NodeHandle, TargetHandle),
        Disconnect(NodeHandle, TargetHandle),
    }

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<Call>,
        fail_connect: Option<AdapterError>,
        fail_disconnect: Option<AdapterError>,
    }

    impl SignalGraph for Recorder {
        fn connect(&mut self, source: NodeHandle, dest: TargetHandle) -> Result<(), AdapterError> {
            self.calls.push(Call::Connect(source, dest));
            self.fail_connect.clone().map_or(Ok(()), Err)
        }

        fn disconnect(
            &mut self,
            source: NodeHandle,
            dest: TargetHandle,
        ) -> Result<(), AdapterError> {
            self.calls.push(Call::Disconnect(source, dest));
            self.fail_disconnect.clone().map_or(Ok(()), Err)
        }
    }

    struct Rig {
        registry: JackRegistry,
        ctl: PatchController<Recorder>,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                registry: JackRegistry::new(),
                ctl: PatchController::seeded(Recorder::default(), WirePalette::default(), 1),
            }
        }

        fn out(&mut self, node: u32) -> JackRef {
            self.registry
                .register_source(NodeHandle::new(node), Position::default())
        }

        fn inp(&mut self, node: u32) -> JackRef {
            self.registry
                .register_destination(NodeHandle::new(node), Position::default())
        }

        fn calls(&self) -> &[Call] {
            &self.ctl.graph().calls
        }
    }

    #[test]
    fn plug_source_then_dest_commits() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);

        assert_eq!(rig.ctl.attempt_plug(Endpoint::of(s1)), Ok(PlugOutcome::Pending));
        assert_eq!(rig.ctl.drag_state(), DragState::Dragging);

        let outcome = rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();
        let key = WireKey {
            source: s1.id(),
            dest: d1.id(),
        };
        assert_eq!(outcome, PlugOutcome::Committed(key));
        assert_eq!(rig.ctl.state().wire_count(), 1);
        assert!(rig.ctl.state().pending().is_none());
        assert_eq!(rig.ctl.drag_state(), DragState::Idle);
        assert_eq!(rig.calls(), &[Call::Connect(NodeHandle::new(0), d1.target())]);
    }

    #[test]
    fn dest_first_also_commits() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);

        rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();
        assert_eq!(
            rig.ctl.state().pending().and_then(|p| p.dest()).map(JackRef::id),
            Some(d1.id())
        );
        let outcome = rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        assert!(matches!(outcome, PlugOutcome::Committed(_)));
    }

    #[test]
    fn replug_same_source_is_noop() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        let before = rig.ctl.snapshot();
        assert_eq!(rig.ctl.attempt_plug(Endpoint::of(s1)), Ok(PlugOutcome::Pending));
        assert_eq!(rig.ctl.snapshot(), before);
        assert!(rig.calls().is_empty());
    }

    #[test]
    fn plugged_jack_is_redundant() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);
        let s2 = rig.out(2);

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(s2)).unwrap();

        let before = rig.ctl.snapshot();
        assert_eq!(
            rig.ctl.attempt_plug(Endpoint::of(d1)),
            Ok(PlugOutcome::Ignored(IgnoreReason::RedundantPlug))
        );
        assert_eq!(rig.ctl.snapshot(), before);
        assert_eq!(rig.calls().len(), 1);
    }

    #[test]
    fn self_connection_keeps_pending() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        let before = rig.ctl.state().pending().cloned();

        assert_eq!(
            rig.ctl.attempt_plug(Endpoint::dest(s1)),
            Ok(PlugOutcome::Ignored(IgnoreReason::SelfConnection))
        );
        assert_eq!(rig.ctl.state().pending().cloned(), before);
        assert_eq!(rig.ctl.drag_state(), DragState::Dragging);
        assert!(rig.calls().is_empty());
    }

    #[test]
    fn mistagged_endpoint_is_ignored() {
        let mut rig = Rig::new();
        let d1 = rig.inp(1);
        assert_eq!(
            rig.ctl.attempt_plug(Endpoint::source(d1)),
            Ok(PlugOutcome::Ignored(IgnoreReason::RoleMismatch))
        );
        assert!(rig.ctl.state().pending().is_none());
    }

    #[test]
    fn same_role_replaces_pending_end() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let s2 = rig.out(1);

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        let color = rig.ctl.state().pending().unwrap().color();
        rig.ctl.attempt_plug(Endpoint::of(s2)).unwrap();

        let pending = rig.ctl.state().pending().unwrap();
        assert_eq!(pending.source().map(JackRef::id), Some(s2.id()));
        assert!(pending.dest().is_none());
        assert_eq!(pending.color(), color);
        assert_eq!(rig.ctl.state().wire_count(), 0);
    }

    #[test]
    fn unplug_reseeds_surviving_end_with_color() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);
        let d2 = rig.inp(2);

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();
        let color = rig.ctl.state().wires()[0].color();

        let UnplugOutcome::PickedUp(wire) = rig.ctl.unplug(d1.id()) else {
            panic!("expected wire to be picked up");
        };
        assert_eq!(wire.color(), color);
        assert_eq!(rig.ctl.state().wire_count(), 0);
        let pending = rig.ctl.state().pending().unwrap();
        assert_eq!(pending.source().map(JackRef::id), Some(s1.id()));
        assert_eq!(pending.color(), color);
        assert_eq!(
            rig.calls().last(),
            Some(&Call::Disconnect(NodeHandle::new(0), d1.target()))
        );

        let outcome = rig.ctl.attempt_plug(Endpoint::of(d2)).unwrap();
        assert!(matches!(outcome, PlugOutcome::Committed(_)));
        assert_eq!(rig.ctl.state().wires()[0].color(), color);
        assert_eq!(rig.ctl.state().wires()[0].dest().id(), d2.id());
    }

    #[test]
    fn unplug_source_side_keeps_dest() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();
        rig.ctl.unplug(s1.id());

        let pending = rig.ctl.state().pending().unwrap();
        assert_eq!(pending.dest().map(JackRef::id), Some(d1.id()));
        assert!(!rig.ctl.state().is_plugged(s1.id()));
    }

    #[test]
    fn already_disconnected_is_tolerated() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);
        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();

        rig.ctl.graph.fail_disconnect = Some(AdapterError::AlreadyDisconnected {
            from: NodeHandle::new(0),
            to: d1.target(),
        });
        assert!(matches!(rig.ctl.unplug(d1.id()), UnplugOutcome::PickedUp(_)));
        assert_eq!(rig.ctl.state().wire_count(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "carries no wire")]
    fn unplug_unplugged_panics_in_debug() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        rig.ctl.unplug(s1.id());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn unplug_unplugged_is_noop_in_release() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        assert_eq!(rig.ctl.unplug(s1.id()), UnplugOutcome::NotPlugged);
        assert!(rig.calls().is_empty());
    }

    #[test]
    fn cancel_clears_pending_only() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);
        let s2 = rig.out(2);
        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(s2)).unwrap();

        assert!(rig.ctl.cancel_pending());
        assert!(rig.ctl.state().pending().is_none());
        assert_eq!(rig.ctl.state().wire_count(), 1);
        assert_eq!(rig.calls().len(), 1);
        assert!(!rig.ctl.cancel_pending());
    }

    #[test]
    fn type_mismatch_surfaces_and_commits_nothing() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);
        rig.ctl.graph.fail_connect = Some(AdapterError::TypeMismatch {
            from: NodeHandle::new(0),
            to: d1.target(),
        });

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        let before = rig.ctl.snapshot();
        let err = rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(rig.ctl.snapshot(), before);
        assert!(!rig.ctl.state().is_plugged(d1.id()));
    }

    #[test]
    fn explicit_color_wins() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);
        let red = ColorTag::from_rgb(0xdd_0808);

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        rig.ctl
            .attempt_plug(Endpoint::of(d1).with_color(red))
            .unwrap();
        assert_eq!(rig.ctl.state().wires()[0].color(), red);
    }

    #[test]
    fn parameter_destination_is_forwarded() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        let param = ParameterHandle::new(NodeHandle::new(5), 0);
        let cv = rig.registry.register(
            JackBinding::Destination(param.into()),
            Position::default(),
        );

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(cv)).unwrap();
        assert_eq!(
            rig.calls(),
            &[Call::Connect(NodeHandle::new(0), TargetHandle::Parameter(param))]
        );
    }

    #[test]
    fn events_follow_mutations() {
        let mut rig = Rig::new();
        let rx = rig.ctl.subscribe();
        let s1 = rig.out(0);
        let d1 = rig.inp(1);

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();

        let events: Vec<PatchEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], PatchEvent::Changed(_)));
        assert_eq!(events[1], PatchEvent::Drag(DragState::Dragging));
        assert!(matches!(&events[2], PatchEvent::Changed(s) if s.wires.len() == 1));
        assert_eq!(events[3], PatchEvent::Drag(DragState::Idle));

        // Ignored plugs publish nothing.
        rig.ctl.attempt_plug(Endpoint::of(d1)).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn navigation_tracks_drag_and_hold() {
        let mut rig = Rig::new();
        let s1 = rig.out(0);
        assert!(rig.ctl.navigation().enabled());

        rig.ctl.attempt_plug(Endpoint::of(s1)).unwrap();
        assert!(!rig.ctl.navigation().enabled());

        rig.ctl.cancel_pending();
        rig.ctl.set_navigation_hold(true);
        assert!(!rig.ctl.navigation().enabled());
        rig.ctl.set_navigation_hold(false);
        assert!(rig.ctl.navigation().enabled());
    }
}
