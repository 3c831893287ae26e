//! Cable colors.
//!
//! A cable gets its color once, when its first end is picked up, and keeps it
//! through every re-plug. Color choice is a pure function of a palette and a
//! caller-owned RNG, so tests can seed it.

use rand::Rng;
use thiserror::Error;

/// Cosmetic cable color, 24-bit RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorTag(u32);

impl ColorTag {
    /// Black.
    pub const BLACK: Self = Self(0x00_0000);
    /// White.
    pub const WHITE: Self = Self(0xff_ffff);

    /// Creates a color from `0xRRGGBB`; bits above 24 are dropped.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    /// Returns the color as `0xRRGGBB`.
    pub const fn rgb(self) -> u32 {
        self.0
    }

    /// Red, green, blue components.
    pub const fn components(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl core::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Error parsing a `#rrggbb` color string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid color '{0}': expected #rrggbb")]
pub struct ParseColorError(pub String);

impl core::str::FromStr for ColorTag {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from_rgb)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

/// Non-empty list of cable colors to draw from.
///
/// Repeating an entry weights it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WirePalette {
    colors: Vec<ColorTag>,
}

impl WirePalette {
    /// Builds a palette; returns `None` if `colors` is empty.
    pub fn new(colors: impl IntoIterator<Item = ColorTag>) -> Option<Self> {
        let colors: Vec<ColorTag> = colors.into_iter().collect();
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// The colors in draw order.
    pub fn colors(&self) -> &[ColorTag] {
        &self.colors
    }

    /// Number of entries (including repeats).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for WirePalette {
    /// Patch-cable blacks and greys, white, and red at double weight.
    fn default() -> Self {
        Self {
            colors: vec![
                ColorTag::BLACK,
                ColorTag::from_rgb(0x1f_1f1f),
                ColorTag::from_rgb(0x3f_3f3f),
                ColorTag::from_rgb(0x7f_7f7f),
                ColorTag::WHITE,
                ColorTag::from_rgb(0xdd_0808),
                ColorTag::from_rgb(0xdd_0808),
            ],
        }
    }
}

/// Draws the color for a new cable.
pub fn next_color<R: Rng + ?Sized>(palette: &WirePalette, rng: &mut R) -> ColorTag {
    palette.colors[rng.gen_range(0..palette.colors.len())]
}
