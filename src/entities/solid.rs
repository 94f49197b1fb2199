//! Solid entity (filled triangle or quadrilateral), used by filled arrow heads

use crate::entities::{Entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};

/// Filled shape defined by 3 or 4 corner points (in OCS)
///
/// A triangle repeats its third corner as fourth corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub common: EntityCommon,
    pub corners: [Vector3; 4],
    /// Normal vector (extrusion direction)
    pub normal: Vector3,
}

impl Solid {
    /// Create a solid from three or four corners
    ///
    /// DXF stores the corners in zig-zag order: the last two corners are
    /// swapped relative to the outline of the shape.
    pub fn new(first: Vector3, second: Vector3, third: Vector3, fourth: Vector3) -> Self {
        Self {
            common: EntityCommon::default(),
            corners: [first, second, third, fourth],
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a triangular solid (3 corners)
    pub fn triangle(first: Vector3, second: Vector3, third: Vector3) -> Self {
        Self::new(first, second, third, third)
    }

    pub fn is_triangle(&self) -> bool {
        self.corners[2] == self.corners[3]
    }
}

impl Entity for Solid {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "SOLID"
    }

    fn bounding_box(&self) -> BoundingBox3D {
        let mut bbox = BoundingBox3D::from_point(self.corners[0]);
        for corner in &self.corners[1..] {
            bbox.expand_to_include(*corner);
        }
        bbox
    }

    fn translate(&mut self, offset: Vector3) {
        for corner in self.corners.iter_mut() {
            *corner = *corner + offset;
        }
    }
}
