//! Line weight of emitted dimension primitives (DIMLWD, DIMLWE)

use std::fmt;

/// Line weight in 1/100 mm or one of the inherited values
///
/// Dimension styles default to [`LineWeight::ByBlock`] so that the generated
/// block inherits the weight of the DIMENSION entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LineWeight {
    /// Use the layer's line weight (-1)
    #[default]
    ByLayer,
    /// Use the block's line weight (-2)
    ByBlock,
    /// Drawing default line weight (-3)
    Default,
    /// Specific line weight in 1/100 mm, 0..=211
    Value(i16),
}

impl LineWeight {
    /// Largest weight a DXF file may store
    pub const MAX: i16 = 211;

    /// Create a line weight from a raw group code value
    ///
    /// Values above [`LineWeight::MAX`] are clamped; unknown negative values
    /// fall back to `ByLayer`.
    pub fn from_value(value: i16) -> Self {
        match value {
            -2 => LineWeight::ByBlock,
            -3 => LineWeight::Default,
            v if v < 0 => LineWeight::ByLayer,
            v => LineWeight::Value(v.min(Self::MAX)),
        }
    }

    /// Get the raw group code value
    pub fn value(&self) -> i16 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Default => -3,
            LineWeight::Value(v) => *v,
        }
    }

    /// Get the line weight in millimeters
    pub fn millimeters(&self) -> Option<f64> {
        match self {
            LineWeight::Value(v) => Some(*v as f64 / 100.0),
            _ => None,
        }
    }
}

impl fmt::Display for LineWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineWeight::ByLayer => write!(f, "ByLayer"),
            LineWeight::ByBlock => write!(f, "ByBlock"),
            LineWeight::Default => write!(f, "Default"),
            LineWeight::Value(v) => write!(f, "{:.2}mm", *v as f64 / 100.0),
        }
    }
}
