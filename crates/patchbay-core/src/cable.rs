//! Cable geometry for drawing.
//!
//! A patch cable leaves its plug straight up, runs across at a fixed height
//! above the panel, and drops into the other plug. The renderer turns the four
//! control points into a smooth tube; this module only produces the points.

use crate::color::ColorTag;
use crate::jack::Position;
use crate::state::Wire;

/// Height of a plug's cable exit above the panel face.
pub const PLUG_HEIGHT: f32 = 0.775;

/// Height at which cables span between plugs.
pub const SPAN_HEIGHT: f32 = 0.9;

/// Control points of one cable, plug to plug.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CablePath {
    /// `[start plug, start lift, end lift, end plug]`.
    pub points: [Position; 4],
    /// Cable color, when the path belongs to a wire.
    pub color: Option<ColorTag>,
}

impl CablePath {
    /// Path from `start` to `end`.
    pub fn between(start: Position, end: Position) -> Self {
        Self {
            points: [
                start.with_z(PLUG_HEIGHT),
                start.with_z(SPAN_HEIGHT),
                end.with_z(SPAN_HEIGHT),
                end.with_z(PLUG_HEIGHT),
            ],
            color: None,
        }
    }

    /// Path of a committed wire, using the positions recorded at plug time.
    pub fn for_wire(wire: &Wire) -> Self {
        Self {
            color: Some(wire.color()),
            ..Self::between(wire.source().locator(), wire.dest().locator())
        }
    }

    /// Start plug position.
    pub fn start(&self) -> Position {
        self.points[0]
    }

    /// End plug position.
    pub fn end(&self) -> Position {
        self.points[3]
    }

    /// Length of the control polygon; an upper bound on the drawn cable length.
    pub fn span(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}
