//! Jack registry.
//!
//! [`JackRegistry`] hands out jack identities when modules are built and keeps
//! each jack's binding and current world position. It is created once per
//! panel session and passed by reference; there is no global instance.
//!
//! Whether a jack is plugged is not stored here. It is derived from the
//! controller's [`PatchState`], whose jack index makes the lookup O(1).

use crate::jack::{JackBinding, JackId, JackRef, Position};
use crate::signal::{NodeHandle, TargetHandle};
use crate::state::PatchState;

/// Registry of every jack on the panel.
#[derive(Debug, Default)]
pub struct JackRegistry {
    jacks: Vec<JackRef>,
}

impl JackRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a jack and returns its snapshot.
    ///
    /// Called exactly once per jack, when its module is instantiated.
    pub fn register(&mut self, binding: JackBinding, locator: Position) -> JackRef {
        let id = JackId(self.jacks.len() as u32);
        let jack = JackRef::new(id, binding, locator);
        self.jacks.push(jack);
        tracing::trace!(%id, role = ?binding.role(), target = %binding.target(), "jack registered");
        jack
    }

    /// Registers an output jack driven by `node`.
    pub fn register_source(&mut self, node: NodeHandle, locator: Position) -> JackRef {
        self.register(JackBinding::Source(node), locator)
    }

    /// Registers an input jack feeding `target`.
    pub fn register_destination(
        &mut self,
        target: impl Into<TargetHandle>,
        locator: Position,
    ) -> JackRef {
        self.register(JackBinding::Destination(target.into()), locator)
    }

    /// Returns the current record for `id`.
    pub fn get(&self, id: JackId) -> Option<&JackRef> {
        self.jacks.get(id.0 as usize)
    }

    /// Moves a jack (its module was dragged across the panel).
    ///
    /// Returns `false` for unknown IDs. Committed wires keep the snapshot taken
    /// when they were plugged; use [`locate()`](Self::locate) for the live spot.
    pub fn set_locator(&mut self, id: JackId, locator: Position) -> bool {
        match self.jacks.get_mut(id.0 as usize) {
            Some(jack) => {
                jack.set_locator(locator);
                true
            }
            None => false,
        }
    }

    /// Resolves a jack's current world position.
    pub fn locate(&self, id: JackId) -> Option<Position> {
        self.get(id).map(JackRef::locator)
    }

    /// True iff a committed wire references `id`.
    #[inline]
    pub fn is_plugged(&self, id: JackId, state: &PatchState) -> bool {
        state.is_plugged(id)
    }

    /// Number of registered jacks.
    pub fn len(&self) -> usize {
        self.jacks.len()
    }

    /// True if no jack has been registered.
    pub fn is_empty(&self) -> bool {
        self.jacks.is_empty()
    }

    /// Iterates over all jacks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &JackRef> {
        self.jacks.iter()
    }
}
