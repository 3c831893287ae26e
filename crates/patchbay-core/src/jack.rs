//! Jack types: identity, role, binding into the signal graph, and location.
//!
//! A jack is fixed to one [`JackRole`] for its whole life. The role is not
//! stored separately; it is derived from the [`JackBinding`] the jack was
//! registered with, so a source jack can only ever be bound to a node output.

use crate::signal::{NodeHandle, TargetHandle};

/// Unique identifier for a jack on the panel.
///
/// Jack IDs are assigned sequentially by the [`JackRegistry`](crate::JackRegistry)
/// and never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JackId(pub(crate) u32);

impl JackId {
    /// Returns the raw numeric identifier.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for JackId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "JackId({})", self.0)
    }
}

/// Which end of a cable a jack accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JackRole {
    /// Signal leaves the module here.
    Source,
    /// Signal enters the module (or modulates a parameter) here.
    Destination,
}

impl JackRole {
    /// The role a cable's other end must have.
    pub fn opposite(self) -> Self {
        match self {
            Self::Source => Self::Destination,
            Self::Destination => Self::Source,
        }
    }
}

/// World-space location of a jack, used only for drawing cables.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate (height above the panel face).
    pub z: f32,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same point, moved to height `z`.
    pub const fn with_z(self, z: f32) -> Self {
        Self { z, ..self }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// How a jack is wired into the signal graph.
///
/// Sources bind only to node outputs; destinations bind to a node input or a
/// node parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JackBinding {
    /// Output jack driven by a node.
    Source(NodeHandle),
    /// Input jack feeding a node or one of its parameters.
    Destination(TargetHandle),
}

impl JackBinding {
    /// Role implied by this binding.
    pub fn role(self) -> JackRole {
        match self {
            Self::Source(_) => JackRole::Source,
            Self::Destination(_) => JackRole::Destination,
        }
    }

    /// Graph target of this binding.
    pub fn target(self) -> TargetHandle {
        match self {
            Self::Source(node) => TargetHandle::Node(node),
            Self::Destination(target) => target,
        }
    }
}

/// Snapshot of a registered jack.
///
/// Cheap to copy; wires and pending cables hold these by value so that the
/// presentation layer can draw them without consulting the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JackRef {
    id: JackId,
    binding: JackBinding,
    locator: Position,
}

impl JackRef {
    pub(crate) fn new(id: JackId, binding: JackBinding, locator: Position) -> Self {
        Self {
            id,
            binding,
            locator,
        }
    }

    /// The jack's identifier.
    #[inline]
    pub fn id(&self) -> JackId {
        self.id
    }

    /// The jack's fixed role.
    #[inline]
    pub fn role(&self) -> JackRole {
        self.binding.role()
    }

    /// Binding into the signal graph.
    #[inline]
    pub fn binding(&self) -> JackBinding {
        self.binding
    }

    /// Graph target of this jack.
    #[inline]
    pub fn target(&self) -> TargetHandle {
        self.binding.target()
    }

    /// Driving node, if this is a source jack.
    pub fn source_node(&self) -> Option<NodeHandle> {
        match self.binding {
            JackBinding::Source(node) => Some(node),
            JackBinding::Destination(_) => None,
        }
    }

    /// Where the jack was when this snapshot was taken.
    #[inline]
    pub fn locator(&self) -> Position {
        self.locator
    }

    pub(crate) fn set_locator(&mut self, locator: Position) {
        self.locator = locator;
    }
}
