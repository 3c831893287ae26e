//! Per-session patch panel: jack registry plus controller, driven by pointer
//! events.
//!
//! [`PatchPanel`] is the input boundary. The embedding scene hit-tests the
//! pointer against jack geometry and reports what it found; the panel turns
//! that into controller calls:
//!
//! - press over a free jack: offer it as a cable end
//! - press over a plugged jack: pick up the cable end
//! - release over a jack while dragging: offer it as the other end
//! - release over empty space: drop the cable

use crossbeam_channel::Receiver;

use crate::controller::{Endpoint, PatchController, PlugOutcome, UnplugOutcome};
use crate::error::PatchError;
use crate::event::{NavigationGate, PatchEvent, PatchSnapshot};
use crate::jack::{JackBinding, JackId, JackRef, Position};
use crate::registry::JackRegistry;
use crate::signal::SignalGraph;

/// What a pointer event did.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// The jack was offered to the controller.
    Plug(PlugOutcome),
    /// A wire was pulled out of the jack.
    Unplug(UnplugOutcome),
    /// A release over a jack with no cable in hand; nothing to complete.
    NotDragging,
    /// The ID is not registered on this panel.
    UnknownJack(JackId),
}

/// One patch panel session.
pub struct PatchPanel<G: SignalGraph> {
    registry: JackRegistry,
    controller: PatchController<G>,
}

impl<G: SignalGraph> PatchPanel<G> {
    /// Creates a panel with an empty registry around `controller`.
    pub fn new(controller: PatchController<G>) -> Self {
        Self {
            registry: JackRegistry::new(),
            controller,
        }
    }

    /// Creates a panel over `graph` with default colors.
    pub fn with_graph(graph: G) -> Self {
        Self::new(PatchController::new(graph))
    }

    /// Registers a jack for a module being built.
    pub fn register_jack(&mut self, binding: JackBinding, locator: Position) -> JackRef {
        self.registry.register(binding, locator)
    }

    // --- Pointer events ---

    /// Pointer pressed over jack `id`.
    ///
    /// # Errors
    ///
    /// Propagates [`PatchError`] from [`PatchController::attempt_plug`].
    pub fn on_jack_pointer_down(&mut self, id: JackId) -> Result<GestureOutcome, PatchError> {
        let Some(jack) = self.registry.get(id).copied() else {
            tracing::warn!(%id, "pointer down on unregistered jack");
            return Ok(GestureOutcome::UnknownJack(id));
        };
        if self.controller.state().is_plugged(id) {
            return Ok(GestureOutcome::Unplug(self.controller.unplug(id)));
        }
        self.controller
            .attempt_plug(Endpoint::of(jack))
            .map(GestureOutcome::Plug)
    }

    /// Pointer released over jack `id`.
    ///
    /// Without a cable in hand the release is ignored. Releasing over a
    /// plugged jack or over the jack the drag started from keeps the drag
    /// going.
    ///
    /// # Errors
    ///
    /// Propagates [`PatchError`] from [`PatchController::attempt_plug`].
    pub fn on_jack_pointer_up(&mut self, id: JackId) -> Result<GestureOutcome, PatchError> {
        let Some(jack) = self.registry.get(id).copied() else {
            tracing::warn!(%id, "pointer up on unregistered jack");
            return Ok(GestureOutcome::UnknownJack(id));
        };
        if !self.controller.state().is_dragging() {
            return Ok(GestureOutcome::NotDragging);
        }
        self.controller
            .attempt_plug(Endpoint::of(jack))
            .map(GestureOutcome::Plug)
    }

    /// Pointer released over empty space. Returns `true` if a cable was dropped.
    pub fn on_background_pointer_up(&mut self) -> bool {
        self.controller.cancel_pending()
    }

    // --- Queries ---

    /// True iff a committed wire references `id`.
    pub fn is_plugged(&self, id: JackId) -> bool {
        self.registry.is_plugged(id, self.controller.state())
    }

    /// Copy of the current state for drawing.
    pub fn snapshot(&self) -> PatchSnapshot {
        self.controller.snapshot()
    }

    /// Receives a [`PatchEvent`] after every change.
    pub fn subscribe(&mut self) -> Receiver<PatchEvent> {
        self.controller.subscribe()
    }

    /// Whether camera navigation may react to the pointer.
    pub fn navigation(&self) -> NavigationGate {
        self.controller.navigation()
    }

    /// The jack registry.
    pub fn registry(&self) -> &JackRegistry {
        &self.registry
    }

    /// Mutable registry access, for moving jacks with their modules.
    pub fn registry_mut(&mut self) -> &mut JackRegistry {
        &mut self.registry
    }

    /// The controller.
    pub fn controller(&self) -> &PatchController<G> {
        &self.controller
    }

    /// Mutable controller access.
    pub fn controller_mut(&mut self) -> &mut PatchController<G> {
        &mut self.controller
    }

    /// Splits the panel into its registry and controller.
    pub fn into_parts(self) -> (JackRegistry, PatchController<G>) {
        (self.registry, self.controller)
    }
}
