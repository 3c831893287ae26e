//! Connection state: committed wires plus at most one half-formed cable.
//!
//! [`PatchState`] is owned by the [`PatchController`](crate::PatchController),
//! which is its only mutator. Everything else (registry queries, presentation)
//! reads it through shared references or [`PatchSnapshot`](crate::PatchSnapshot)s.
//!
//! # Invariants
//!
//! - A jack ID appears in at most one wire.
//! - A jack ID appears in the pending slot only if it is not in a wire.
//! - The pending cable has exactly one resolved end.

use std::collections::HashMap;

use crate::color::ColorTag;
use crate::jack::{JackId, JackRef};
use crate::signal::NodeHandle;

/// Key of a committed wire: `(source jack, destination jack)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireKey {
    /// Source jack.
    pub source: JackId,
    /// Destination jack.
    pub dest: JackId,
}

impl core::fmt::Display for WireKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} → {}", self.source, self.dest)
    }
}

/// A committed cable between a source jack and a destination jack.
#[derive(Clone, Debug, PartialEq)]
pub struct Wire {
    source: JackRef,
    dest: JackRef,
    /// Cached from `source`'s binding at commit time.
    source_node: NodeHandle,
    color: ColorTag,
}

impl Wire {
    /// Builds a wire; `None` unless `source` is a source jack, `dest` is a
    /// destination jack, and they are different jacks.
    pub(crate) fn new(source: JackRef, dest: JackRef, color: ColorTag) -> Option<Self> {
        let source_node = source.source_node()?;
        if dest.source_node().is_some() || source.id() == dest.id() {
            return None;
        }
        Some(Self {
            source,
            dest,
            source_node,
            color,
        })
    }

    /// Key of this wire.
    pub fn key(&self) -> WireKey {
        WireKey {
            source: self.source.id(),
            dest: self.dest.id(),
        }
    }

    /// Source end, as it was when the wire was plugged.
    pub fn source(&self) -> &JackRef {
        &self.source
    }

    /// Destination end, as it was when the wire was plugged.
    pub fn dest(&self) -> &JackRef {
        &self.dest
    }

    /// Node driving this wire.
    pub fn source_node(&self) -> NodeHandle {
        self.source_node
    }

    /// Cable color.
    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// True if either end is `jack`.
    pub fn touches(&self, jack: JackId) -> bool {
        self.source.id() == jack || self.dest.id() == jack
    }

    /// The end that stays put when `moved` is pulled out.
    ///
    /// Returns `None` if `moved` is not an end of this wire.
    pub fn other_end(&self, moved: JackId) -> Option<&JackRef> {
        if self.dest.id() == moved {
            Some(&self.source)
        } else if self.source.id() == moved {
            Some(&self.dest)
        } else {
            None
        }
    }
}

/// A cable with one end plugged into a jack and the other following the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingConnection {
    pub(crate) source: Option<JackRef>,
    pub(crate) dest: Option<JackRef>,
    pub(crate) color: ColorTag,
}

impl PendingConnection {
    /// A cable hanging from a source jack.
    pub(crate) fn from_source(source: JackRef, color: ColorTag) -> Self {
        Self {
            source: Some(source),
            dest: None,
            color,
        }
    }

    /// A cable hanging from a destination jack.
    pub(crate) fn from_dest(dest: JackRef, color: ColorTag) -> Self {
        Self {
            source: None,
            dest: Some(dest),
            color,
        }
    }

    /// Source end, if that is the resolved one.
    pub fn source(&self) -> Option<&JackRef> {
        self.source.as_ref()
    }

    /// Destination end, if that is the resolved one.
    pub fn dest(&self) -> Option<&JackRef> {
        self.dest.as_ref()
    }

    /// Cable color.
    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// The resolved end.
    pub fn anchor(&self) -> Option<&JackRef> {
        self.source.as_ref().or(self.dest.as_ref())
    }

    /// True if `jack` is one of the resolved ends.
    pub fn contains(&self, jack: JackId) -> bool {
        self.source.is_some_and(|j| j.id() == jack) || self.dest.is_some_and(|j| j.id() == jack)
    }
}

/// Committed wires and the pending cable.
#[derive(Clone, Debug, Default)]
pub struct PatchState {
    /// In plug order; this is also the draw order.
    wires: Vec<Wire>,
    /// Every jack that is an end of a wire, mapped to that wire.
    by_jack: HashMap<JackId, WireKey>,
    pending: Option<PendingConnection>,
}

impl PatchState {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed wires in plug order.
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Number of committed wires.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Looks up a wire by key.
    pub fn wire(&self, key: WireKey) -> Option<&Wire> {
        self.wires.iter().find(|w| w.key() == key)
    }

    /// The wire plugged into `jack`, if any.
    pub fn wire_for(&self, jack: JackId) -> Option<&Wire> {
        self.by_jack.get(&jack).and_then(|key| self.wire(*key))
    }

    /// True iff a committed wire references `jack`.
    #[inline]
    pub fn is_plugged(&self, jack: JackId) -> bool {
        self.by_jack.contains_key(&jack)
    }

    /// The half-formed cable, if a drag is in progress.
    pub fn pending(&self) -> Option<&PendingConnection> {
        self.pending.as_ref()
    }

    /// True while a cable end is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn insert_wire(&mut self, wire: Wire) -> WireKey {
        let key = wire.key();
        debug_assert!(!self.is_plugged(key.source), "{} already plugged", key.source);
        debug_assert!(!self.is_plugged(key.dest), "{} already plugged", key.dest);
        self.by_jack.insert(key.source, key);
        self.by_jack.insert(key.dest, key);
        self.wires.push(wire);
        key
    }

    pub(crate) fn remove_wire(&mut self, key: WireKey) -> Option<Wire> {
        let idx = self.wires.iter().position(|w| w.key() == key)?;
        let wire = self.wires.remove(idx);
        self.by_jack.remove(&key.source);
        self.by_jack.remove(&key.dest);
        Some(wire)
    }

    pub(crate) fn set_pending(&mut self, pending: Option<PendingConnection>) {
        self.pending = pending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jack::{JackBinding, Position};

    fn source(id: u32) -> JackRef {
        JackRef::new(
            JackId(id),
            JackBinding::Source(NodeHandle::new(id)),
            Position::default(),
        )
    }

    fn dest(id: u32) -> JackRef {
        JackRef::new(
            JackId(id),
            JackBinding::Destination(NodeHandle::new(id).into()),
            Position::default(),
        )
    }

    #[test]
    fn wire_rejects_bad_roles_and_self_loops() {
        assert!(Wire::new(source(0), dest(1), ColorTag::BLACK).is_some());
        assert!(Wire::new(dest(1), source(0), ColorTag::BLACK).is_none());
        assert!(Wire::new(source(0), source(1), ColorTag::BLACK).is_none());

        let fake_dest = JackRef::new(
            JackId(0),
            JackBinding::Destination(NodeHandle::new(0).into()),
            Position::default(),
        );
        assert!(Wire::new(source(0), fake_dest, ColorTag::BLACK).is_none());
    }

    #[test]
    fn insert_and_remove_keep_index_in_sync() {
        let mut state = PatchState::new();
        let key = state.insert_wire(Wire::new(source(0), dest(1), ColorTag::WHITE).unwrap());

        assert!(state.is_plugged(JackId(0)));
        assert!(state.is_plugged(JackId(1)));
        assert_eq!(state.wire_for(JackId(1)).map(Wire::key), Some(key));

        let removed = state.remove_wire(key).unwrap();
        assert_eq!(removed.color(), ColorTag::WHITE);
        assert!(!state.is_plugged(JackId(0)));
        assert!(!state.is_plugged(JackId(1)));
        assert_eq!(state.wire_count(), 0);
        assert!(state.remove_wire(key).is_none());
    }

    #[test]
    fn other_end_picks_survivor() {
        let wire = Wire::new(source(0), dest(1), ColorTag::BLACK).unwrap();
        assert_eq!(wire.other_end(JackId(1)).map(JackRef::id), Some(JackId(0)));
        assert_eq!(wire.other_end(JackId(0)).map(JackRef::id), Some(JackId(1)));
        assert!(wire.other_end(JackId(5)).is_none());
        assert!(wire.touches(JackId(0)));
        assert!(!wire.touches(JackId(5)));
    }

    #[test]
    fn pending_anchor() {
        let p = PendingConnection::from_dest(dest(3), ColorTag::BLACK);
        assert_eq!(p.anchor().map(JackRef::id), Some(JackId(3)));
        assert!(p.contains(JackId(3)));
        assert!(p.source().is_none());
    }
}
