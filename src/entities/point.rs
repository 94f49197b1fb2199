//! Point entity, used for dimension definition point markers

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};

/// A point entity in 3D space
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the point (in WCS)
    pub location: Vector3,
}

impl Point {
    /// Create a new point at the origin
    pub fn new() -> Self {
        Point {
            common: EntityCommon::new(),
            location: Vector3::ZERO,
        }
    }

    /// Create a new point at a specific location
    pub fn at(location: Vector3) -> Self {
        Point {
            location,
            ..Self::new()
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Point {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "POINT"
    }

    fn bounding_box(&self) -> BoundingBox3D {
        BoundingBox3D::from_point(self.location)
    }

    fn translate(&mut self, offset: Vector3) {
        self.location = self.location + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let point = Point::at(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(point.location, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(point.entity_type(), "POINT");
        assert_eq!(point.layer(), "0");
    }

    #[test]
    fn test_point_translate() {
        let mut point = Point::new();
        point.translate(Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(point.bounding_box().min, Vector3::new(1.0, 1.0, 0.0));
    }
}
