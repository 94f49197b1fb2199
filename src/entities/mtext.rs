//! Multi-line text entity, used for dimension text from R13 on

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};

/// Attachment point of MText and of dimension text (group code 71)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentPoint {
    TopLeft = 1,
    TopCenter = 2,
    TopRight = 3,
    MiddleLeft = 4,
    #[default]
    MiddleCenter = 5,
    MiddleRight = 6,
    BottomLeft = 7,
    BottomCenter = 8,
    BottomRight = 9,
}

impl AttachmentPoint {
    /// Map a raw group code value
    pub fn from_code(code: i16) -> Option<Self> {
        Some(match code {
            1 => AttachmentPoint::TopLeft,
            2 => AttachmentPoint::TopCenter,
            3 => AttachmentPoint::TopRight,
            4 => AttachmentPoint::MiddleLeft,
            5 => AttachmentPoint::MiddleCenter,
            6 => AttachmentPoint::MiddleRight,
            7 => AttachmentPoint::BottomLeft,
            8 => AttachmentPoint::BottomCenter,
            9 => AttachmentPoint::BottomRight,
            _ => return None,
        })
    }

    pub fn code(&self) -> i16 {
        *self as i16
    }
}

/// A multi-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct MText {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content (may contain formatting codes)
    pub value: String,
    /// Insertion point (in WCS)
    pub insertion_point: Vector3,
    /// Character height
    pub height: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Text style name
    pub style: String,
    pub attachment_point: AttachmentPoint,
    /// Normal vector
    pub normal: Vector3,
}

impl MText {
    /// Create a new MText with value and position
    pub fn with_value(value: impl Into<String>, position: Vector3) -> Self {
        MText {
            common: EntityCommon::new(),
            value: value.into(),
            insertion_point: position,
            height: 1.0,
            rotation: 0.0,
            style: "Standard".to_string(),
            attachment_point: AttachmentPoint::TopLeft,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Text without inline formatting codes
    pub fn plain_text(&self) -> String {
        self.value.replace("\\P", "\n")
    }
}

impl Entity for MText {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "MTEXT"
    }

    fn bounding_box(&self) -> BoundingBox3D {
        BoundingBox3D::from_point(self.insertion_point)
    }

    fn translate(&mut self, offset: Vector3) {
        self.insertion_point = self.insertion_point + offset;
    }
}
