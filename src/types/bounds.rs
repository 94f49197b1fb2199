//! Axis aligned bounding boxes for entities and construction lines

use super::vector::{Vector3, VECTOR_TOLERANCE};
use std::fmt;

/// 3D bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox3D {
    /// Minimum point (lower-left-back corner)
    pub min: Vector3,
    /// Maximum point (upper-right-front corner)
    pub max: Vector3,
}

impl BoundingBox3D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Vector3, max: Vector3) -> Self {
        BoundingBox3D { min, max }
    }

    /// Create a bounding box from a single point
    pub fn from_point(point: Vector3) -> Self {
        BoundingBox3D {
            min: point,
            max: point,
        }
    }

    /// Create a bounding box that contains all given points
    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox3D::from_point(*first);
        for point in rest {
            bbox.expand_to_include(*point);
        }
        Some(bbox)
    }

    /// Get the width of the bounding box (X dimension)
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box (Y dimension)
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Vector3 {
        self.min.lerp(&self.max, 0.5)
    }

    /// Check if this bounding box contains a point, borders included
    pub fn contains(&self, point: Vector3) -> bool {
        self.contains_xy(point)
            && point.z >= self.min.z - VECTOR_TOLERANCE
            && point.z <= self.max.z + VECTOR_TOLERANCE
    }

    /// Like [`BoundingBox3D::contains`] but ignores z
    ///
    /// Construction geometry is planar; a tolerance keeps points computed
    /// on a horizontal or vertical border inside.
    pub fn contains_xy(&self, point: Vector3) -> bool {
        point.x >= self.min.x - VECTOR_TOLERANCE
            && point.x <= self.max.x + VECTOR_TOLERANCE
            && point.y >= self.min.y - VECTOR_TOLERANCE
            && point.y <= self.max.y + VECTOR_TOLERANCE
    }

    /// Check whether two boxes overlap in the xy-plane
    pub fn intersects_xy(&self, other: &BoundingBox3D) -> bool {
        self.min.x <= other.max.x + VECTOR_TOLERANCE
            && other.min.x <= self.max.x + VECTOR_TOLERANCE
            && self.min.y <= other.max.y + VECTOR_TOLERANCE
            && other.min.y <= self.max.y + VECTOR_TOLERANCE
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Merge with another bounding box
    pub fn merge(&self, other: &BoundingBox3D) -> BoundingBox3D {
        let mut merged = *self;
        merged.expand_to_include(other.min);
        merged.expand_to_include(other.max);
        merged
    }
}

impl fmt::Display for BoundingBox3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox3D[{} -> {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox3d_from_points() {
        let points = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(10.0, 5.0, 3.0),
            Vector3::new(-5.0, 3.0, -2.0),
        ];
        let bbox = BoundingBox3D::from_points(&points).unwrap();
        assert_eq!(bbox.min, Vector3::new(-5.0, 0.0, -2.0));
        assert_eq!(bbox.max, Vector3::new(10.0, 5.0, 3.0));
        assert!(BoundingBox3D::from_points(&[]).is_none());
    }

    #[test]
    fn test_contains_with_tolerance() {
        let bbox = BoundingBox3D::new(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
        assert!(bbox.contains(Vector3::new(5.0, 1e-12, 0.0)));
        assert!(!bbox.contains(Vector3::new(5.0, 0.1, 0.0)));
    }

    #[test]
    fn test_intersects_xy() {
        let a = BoundingBox3D::new(Vector3::ZERO, Vector3::new(2.0, 2.0, 0.0));
        let b = BoundingBox3D::new(Vector3::new(1.0, 1.0, 0.0), Vector3::new(3.0, 3.0, 0.0));
        let c = BoundingBox3D::new(Vector3::new(5.0, 5.0, 0.0), Vector3::new(6.0, 6.0, 0.0));
        assert!(a.intersects_xy(&b));
        assert!(!a.intersects_xy(&c));
        assert_eq!(a.merge(&c).max, Vector3::new(6.0, 6.0, 0.0));
    }
}
