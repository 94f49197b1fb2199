//! Line entity

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};

/// A line entity defined by two endpoints in WCS
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line
    pub start: Vector3,
    /// End point of the line
    pub end: Vector3,
}

impl Line {
    /// Create a new line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Line {
            common: EntityCommon::new(),
            start,
            end,
        }
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Get the midpoint of the line
    pub fn midpoint(&self) -> Vector3 {
        self.start.lerp(&self.end, 0.5)
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::from_points(Vector3::ZERO, Vector3::ZERO)
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LINE"
    }

    fn bounding_box(&self) -> BoundingBox3D {
        BoundingBox3D::from_point(self.start).merge(&BoundingBox3D::from_point(self.end))
    }

    fn translate(&mut self, offset: Vector3) {
        self.start = self.start + offset;
        self.end = self.end + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length() {
        let line = Line::from_points(Vector3::ZERO, Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.entity_type(), "LINE");
    }

    #[test]
    fn test_line_midpoint() {
        let line = Line::from_points(Vector3::ZERO, Vector3::new(10.0, 20.0, 30.0));
        assert_eq!(line.midpoint(), Vector3::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn test_line_translate() {
        let mut line = Line::from_points(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
        line.translate(Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(line.start, Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(line.end, Vector3::new(15.0, 5.0, 5.0));
    }
}
