//! Entity colors and the ACI values stored in DIMCLRD, DIMCLRE and DIMCLRT

use std::fmt;

/// Color of an entity or of a dimension element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (ACI 256)
    #[default]
    ByLayer,
    /// Color by block (ACI 0), the dimension style default
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const RED: Color = Color::Index(1);
    pub const WHITE: Color = Color::Index(7);

    /// Map a raw ACI group code value
    ///
    /// Negative values mark a layer that is switched off and keep their
    /// magnitude; anything above 256 falls back to white.
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::Index(index.unsigned_abs().min(255) as u8),
            _ => Color::WHITE,
        }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Raw ACI value, `None` for true colors
    pub fn to_aci(&self) -> Option<i16> {
        match self {
            Color::ByBlock => Some(0),
            Color::ByLayer => Some(256),
            Color::Index(i) => Some(*i as i16),
            Color::Rgb { .. } => None,
        }
    }

    /// True if the color is inherited from the layer or the block reference
    pub fn is_inherited(&self) -> bool {
        matches!(self, Color::ByLayer | Color::ByBlock)
    }
}

impl From<i16> for Color {
    fn from(index: i16) -> Self {
        Color::from_index(index)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}
