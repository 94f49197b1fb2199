//! Basic value types shared by entities, tables and the renderer

pub mod bounds;
pub mod color;
pub mod handle;
pub mod line_weight;
pub mod transform;
pub mod vector;

pub use bounds::BoundingBox3D;
pub use color::Color;
pub use handle::{Handle, HandleGenerator};
pub use line_weight::LineWeight;
pub use transform::{CoordinateSystem, Matrix3, Ocs, Ucs};
pub use vector::{Vector3, VECTOR_TOLERANCE};

use std::fmt;

/// DXF file format version, ordered from oldest to newest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DxfVersion {
    /// AutoCAD R12
    AC1009,
    /// AutoCAD R13
    AC1012,
    /// AutoCAD R14
    AC1014,
    /// AutoCAD 2000
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013
    AC1027,
    /// AutoCAD 2018
    #[default]
    AC1032,
}

impl DxfVersion {
    /// Version string as stored in `$ACADVER`
    pub fn as_str(&self) -> &'static str {
        match self {
            DxfVersion::AC1009 => "AC1009",
            DxfVersion::AC1012 => "AC1012",
            DxfVersion::AC1014 => "AC1014",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Parse a `$ACADVER` string
    pub fn from_version_string(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "AC1009" => Some(DxfVersion::AC1009),
            "AC1012" => Some(DxfVersion::AC1012),
            "AC1014" => Some(DxfVersion::AC1014),
            "AC1015" => Some(DxfVersion::AC1015),
            "AC1018" => Some(DxfVersion::AC1018),
            "AC1021" => Some(DxfVersion::AC1021),
            "AC1024" => Some(DxfVersion::AC1024),
            "AC1027" => Some(DxfVersion::AC1027),
            "AC1032" => Some(DxfVersion::AC1032),
            _ => None,
        }
    }

    /// Lineweights, linetype overrides on extension lines and MTEXT need R2000+
    pub fn supports_extended_styles(&self) -> bool {
        *self >= DxfVersion::AC1015
    }

    /// R12 has no MTEXT entity
    pub fn supports_mtext(&self) -> bool {
        *self > DxfVersion::AC1009
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(DxfVersion::AC1009 < DxfVersion::AC1015);
        assert!(!DxfVersion::AC1014.supports_extended_styles());
        assert!(DxfVersion::AC1015.supports_extended_styles());
        assert!(DxfVersion::AC1012.supports_mtext());
        assert!(!DxfVersion::AC1009.supports_mtext());
    }

    #[test]
    fn test_version_parse() {
        assert_eq!(DxfVersion::from_version_string("ac1015"), Some(DxfVersion::AC1015));
        assert_eq!(DxfVersion::from_version_string("AC9999"), None);
        assert_eq!(DxfVersion::AC1032.to_string(), "AC1032");
    }
}
