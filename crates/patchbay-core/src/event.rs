//! Change notifications for the presentation layer.
//!
//! After every mutating call the controller publishes a [`PatchEvent`] to its
//! subscribers. Subscribers that prefer polling can call
//! [`PatchController::snapshot()`](crate::PatchController::snapshot) instead.

use crossbeam_channel::{Receiver, Sender};

use crate::cable::CablePath;
use crate::jack::Position;
use crate::state::{PatchState, PendingConnection, Wire};

/// Whether a cable end is currently being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    /// No cable in hand.
    #[default]
    Idle,
    /// One cable end follows the pointer.
    Dragging,
}

impl DragState {
    /// True while dragging.
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

/// Immutable copy of the patch for drawing.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PatchSnapshot {
    /// Committed wires in plug order.
    pub wires: Vec<Wire>,
    /// The cable in hand, if any.
    pub pending: Option<PendingConnection>,
    /// Drag state at the time of the snapshot.
    pub drag: DragState,
}

impl PatchSnapshot {
    pub(crate) fn capture(state: &PatchState) -> Self {
        Self {
            wires: state.wires().to_vec(),
            pending: state.pending().cloned(),
            drag: if state.is_dragging() {
                DragState::Dragging
            } else {
                DragState::Idle
            },
        }
    }

    /// Cable paths for every committed wire, in draw order.
    pub fn cable_paths(&self) -> impl Iterator<Item = CablePath> + '_ {
        self.wires.iter().map(CablePath::for_wire)
    }

    /// The in-progress cable, its loose end at `pointer`.
    pub fn preview(&self, pointer: Position) -> Option<CablePath> {
        let pending = self.pending.as_ref()?;
        let anchor = pending.anchor()?;
        Some(CablePath {
            color: Some(pending.color()),
            ..CablePath::between(anchor.locator(), pointer)
        })
    }
}

/// Published by the controller after state changes.
#[derive(Clone, Debug, PartialEq)]
pub enum PatchEvent {
    /// The wire set or the pending cable changed.
    Changed(PatchSnapshot),
    /// The drag state flipped.
    Drag(DragState),
}

/// Fan-out of events to any number of subscribers.
///
/// Subscribers whose receiver was dropped are pruned on the next publish.
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<PatchEvent>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self) -> Receiver<PatchEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.senders.push(tx);
        rx
    }

    pub(crate) fn publish(&mut self, event: &PatchEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}

/// Whether background navigation (camera pan/orbit) may react to the pointer.
///
/// Navigation is suspended while a cable is dragged and while some other
/// control (a knob being turned, say) holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NavigationGate {
    /// A cable is in hand.
    pub dragging: bool,
    /// Another control has claimed the pointer.
    pub held: bool,
}

impl NavigationGate {
    /// True if the camera may move.
    pub fn enabled(self) -> bool {
        !self.dragging && !self.held
    }
}
