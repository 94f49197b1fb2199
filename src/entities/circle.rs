//! Circle entity, part of the dot arrow shapes

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};

/// A circle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (in OCS)
    pub center: Vector3,
    pub radius: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Circle {
    /// Create a new circle with center and radius
    pub fn from_center_radius(center: Vector3, radius: f64) -> Self {
        Circle {
            common: EntityCommon::new(),
            center,
            radius,
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

impl Entity for Circle {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "CIRCLE"
    }

    fn bounding_box(&self) -> BoundingBox3D {
        let r = Vector3::new(self.radius, self.radius, 0.0);
        BoundingBox3D::new(self.center - r, self.center + r)
    }

    fn translate(&mut self, offset: Vector3) {
        self.center = self.center + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_bounding_box() {
        let circle = Circle::from_center_radius(Vector3::new(1.0, 1.0, 0.0), 0.5);
        let bbox = circle.bounding_box();
        assert_eq!(bbox.min, Vector3::new(0.5, 0.5, 0.0));
        assert_eq!(bbox.max, Vector3::new(1.5, 1.5, 0.0));
        assert_eq!(circle.diameter(), 1.0);
    }
}
