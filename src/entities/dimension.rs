//! Dimension entity
//!
//! Holds the defining points of a dimension. The rendered geometry lives in
//! an anonymous block whose name is stored in [`Dimension::geometry`].

use super::mtext::AttachmentPoint;
use super::{Entity, EntityCommon};
use crate::tables::DimValue;
use crate::types::{BoundingBox3D, Vector3};
use bitflags::bitflags;
use indexmap::IndexMap;

/// Dimension type stored in the low bits of group code 70
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionType {
    /// Rotated, horizontal, or vertical linear dimension
    Linear = 0,
    /// Aligned dimension
    Aligned = 1,
    /// Angular 2 lines dimension
    Angular = 2,
    /// Diameter dimension
    Diameter = 3,
    /// Radius dimension
    Radius = 4,
    /// Angular 3 points dimension
    Angular3Point = 5,
    /// Ordinate dimension
    Ordinate = 6,
}

impl DimensionType {
    /// Map a type code (flag bits already removed)
    pub fn from_code(code: i16) -> Option<Self> {
        Some(match code {
            0 => DimensionType::Linear,
            1 => DimensionType::Aligned,
            2 => DimensionType::Angular,
            3 => DimensionType::Diameter,
            4 => DimensionType::Radius,
            5 => DimensionType::Angular3Point,
            6 => DimensionType::Ordinate,
            _ => return None,
        })
    }
}

bitflags! {
    /// Flag bits stored above the type code in group code 70
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DimensionFlags: i16 {
        /// Geometry block is referenced by this dimension only
        const BLOCK_EXCLUSIVE = 32;
        /// Ordinate dimension measures X
        const ORDINATE_TYPE_X = 64;
        /// Text was placed by the user at `text_midpoint`
        const USER_LOCATION_OVERRIDE = 128;
    }
}

/// Mask of the type code bits in group code 70
const TYPE_MASK: i16 = 7;

/// A DIMENSION entity
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub common: EntityCommon,
    /// Name of the anonymous block holding the rendered geometry
    pub geometry: String,
    /// Dimension style name
    pub dimstyle: String,
    /// Point on the dimension line (WCS)
    pub defpoint: Vector3,
    /// First extension line origin (WCS)
    pub defpoint2: Vector3,
    /// Second extension line origin (WCS)
    pub defpoint3: Vector3,
    /// Middle point of the dimension text (OCS)
    pub text_midpoint: Vector3,
    /// Dimension line direction in radians
    pub angle: f64,
    /// Text rotation in radians, aligned with the dimension line if unset
    pub text_rotation: Option<f64>,
    /// Text override: `""` or `"<>"` is the measurement, `" "` no text
    pub text: String,
    /// Raw group code 70: type code plus [`DimensionFlags`]
    pub dimtype: i16,
    /// Text attachment point, middle center if unset
    pub attachment_point: Option<AttachmentPoint>,
    /// Measurement of the last render, before DIMLFAC
    pub actual_measurement: Option<f64>,
    /// Normal vector of the dimension plane
    pub extrusion: Vector3,
    /// Per-entity dimension style overrides, keyed by lower case variable name
    pub overrides: IndexMap<String, DimValue>,
}

impl Dimension {
    /// Create a dimension of the given type with all points at the origin
    pub fn new(dim_type: DimensionType) -> Self {
        Dimension {
            common: EntityCommon::new(),
            geometry: String::new(),
            dimstyle: "Standard".to_string(),
            defpoint: Vector3::ZERO,
            defpoint2: Vector3::ZERO,
            defpoint3: Vector3::ZERO,
            text_midpoint: Vector3::ZERO,
            angle: 0.0,
            text_rotation: None,
            text: String::new(),
            dimtype: dim_type as i16 | DimensionFlags::BLOCK_EXCLUSIVE.bits(),
            attachment_point: None,
            actual_measurement: None,
            extrusion: Vector3::UNIT_Z,
            overrides: IndexMap::new(),
        }
    }

    /// Rotated linear dimension measuring `p1`..`p2` along `angle` (radians)
    /// with the dimension line through `base`
    pub fn linear(base: Vector3, p1: Vector3, p2: Vector3, angle: f64) -> Self {
        Dimension {
            defpoint: base,
            defpoint2: p1,
            defpoint3: p2,
            angle,
            ..Self::new(DimensionType::Linear)
        }
    }

    /// Aligned dimension: the dimension line is parallel to `p1`..`p2`
    pub fn aligned(base: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Dimension {
            defpoint: base,
            defpoint2: p1,
            defpoint3: p2,
            angle: (p2 - p1).angle(),
            ..Self::new(DimensionType::Aligned)
        }
    }

    /// Type code without flag bits
    pub fn dim_type(&self) -> i16 {
        self.dimtype & TYPE_MASK
    }

    /// Flag bits of group code 70
    pub fn flags(&self) -> DimensionFlags {
        DimensionFlags::from_bits_truncate(self.dimtype)
    }

    pub fn set_flag(&mut self, flag: DimensionFlags, state: bool) {
        let mut flags = self.flags();
        flags.set(flag, state);
        self.dimtype = self.dim_type() | flags.bits();
    }

    /// True if the text midpoint was placed by the user
    pub fn user_location_override(&self) -> bool {
        self.flags().contains(DimensionFlags::USER_LOCATION_OVERRIDE)
    }

    /// Place the text at `location` and mark it as user placed
    pub fn set_text_location(&mut self, location: Vector3) {
        self.text_midpoint = location;
        self.set_flag(DimensionFlags::USER_LOCATION_OVERRIDE, true);
    }

    /// Set a per-entity style override, e.g. `("dimtad", 1.into())`
    pub fn set_override(&mut self, name: &str, value: impl Into<DimValue>) {
        self.overrides.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Builder: Set the dimension style name
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.dimstyle = style.into();
        self
    }

    /// Builder: Set the text override
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::new(DimensionType::Linear)
    }
}

impl Entity for Dimension {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "DIMENSION"
    }

    fn bounding_box(&self) -> BoundingBox3D {
        let mut bbox = BoundingBox3D::from_point(self.defpoint);
        bbox.expand_to_include(self.defpoint2);
        bbox.expand_to_include(self.defpoint3);
        bbox
    }

    fn translate(&mut self, offset: Vector3) {
        self.defpoint = self.defpoint + offset;
        self.defpoint2 = self.defpoint2 + offset;
        self.defpoint3 = self.defpoint3 + offset;
        self.text_midpoint = self.text_midpoint + offset;
    }
}
