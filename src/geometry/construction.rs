//! Infinite rays and bounded lines

use crate::error::{DxfError, Result};
use crate::types::{BoundingBox3D, Vector3, VECTOR_TOLERANCE};

/// Infinite line through a location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionRay {
    /// Point on the ray
    pub location: Vector3,
    /// Unit direction in the xy-plane
    pub direction: Vector3,
}

impl ConstructionRay {
    /// Ray through `location` with `angle` in radians
    pub fn new(location: Vector3, angle: f64) -> Self {
        ConstructionRay {
            location,
            direction: Vector3::from_angle(angle, 1.0),
        }
    }

    /// Ray through two distinct points
    pub fn from_points(p1: Vector3, p2: Vector3) -> Result<Self> {
        let direction = Vector3::new(p2.x - p1.x, p2.y - p1.y, 0.0).normalize_to(1.0)?;
        Ok(ConstructionRay {
            location: p1,
            direction,
        })
    }

    /// Direction angle in radians
    pub fn angle(&self) -> f64 {
        self.direction.angle()
    }

    /// Point at parameter `t` along the ray
    pub fn point_at(&self, t: f64) -> Vector3 {
        self.location + self.direction * t
    }

    /// True if both rays have the same or the opposite direction
    pub fn is_parallel(&self, other: &ConstructionRay) -> bool {
        cross_z(self.direction, other.direction).abs() <= VECTOR_TOLERANCE
    }

    /// Intersection point of two rays
    ///
    /// Parallel and coincident rays have no unique intersection and fail with
    /// [`DxfError::Geometry`].
    pub fn intersect(&self, other: &ConstructionRay) -> Result<Vector3> {
        let denom = cross_z(self.direction, other.direction);
        if denom.abs() <= VECTOR_TOLERANCE {
            return Err(DxfError::Geometry(format!(
                "rays through {} and {} are parallel",
                self.location, other.location
            )));
        }
        let w = other.location - self.location;
        let t = cross_z(w, other.direction) / denom;
        let p = self.point_at(t);
        Ok(Vector3::new(p.x, p.y, self.location.z))
    }
}

/// Bounded line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionLine {
    pub start: Vector3,
    pub end: Vector3,
}

impl ConstructionLine {
    pub fn new(start: Vector3, end: Vector3) -> Self {
        ConstructionLine { start, end }
    }

    /// Bounding box of both end points
    pub fn bounding_box(&self) -> BoundingBox3D {
        let mut bbox = BoundingBox3D::from_point(self.start);
        bbox.expand_to_include(self.end);
        bbox
    }

    /// Supporting ray, `None` for a zero-length line
    pub fn ray(&self) -> Option<ConstructionRay> {
        ConstructionRay::from_points(self.start, self.end).ok()
    }

    /// Test if `point` is inside the xy-extents of this line
    pub fn in_range(&self, point: Vector3) -> bool {
        self.bounding_box().contains_xy(point)
    }

    /// Intersection point within both segments
    ///
    /// Parallel or degenerate lines and intersections outside of either
    /// segment return `None`.
    pub fn intersect(&self, other: &ConstructionLine) -> Option<Vector3> {
        let ray1 = self.ray()?;
        let ray2 = other.ray()?;
        if !self.bounding_box().intersects_xy(&other.bounding_box()) {
            return None;
        }
        let point = ray1.intersect(&ray2).ok()?;
        if self.in_range(point) && other.in_range(point) {
            Some(point)
        } else {
            None
        }
    }

    /// Intersection point with an infinite ray, within this segment
    pub fn intersect_ray(&self, ray: &ConstructionRay) -> Option<Vector3> {
        let point = self.ray()?.intersect(ray).ok()?;
        if self.in_range(point) {
            Some(point)
        } else {
            None
        }
    }

    /// Segment length
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

fn cross_z(a: Vector3, b: Vector3) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_ray_intersection() {
        let horizontal = ConstructionRay::new(Vector3::new(0.0, 5.0, 0.0), 0.0);
        let vertical = ConstructionRay::new(Vector3::new(3.0, 0.0, 0.0), FRAC_PI_2);
        let p = horizontal.intersect(&vertical).unwrap();
        assert!(p.is_close(&Vector3::new(3.0, 5.0, 0.0)));
    }

    #[test]
    fn test_ray_parallel_fails() {
        let a = ConstructionRay::new(Vector3::ZERO, 0.3);
        let b = ConstructionRay::new(Vector3::new(0.0, 1.0, 0.0), 0.3);
        assert!(a.is_parallel(&b));
        assert!(matches!(a.intersect(&b), Err(DxfError::Geometry(_))));
    }

    #[test]
    fn test_ray_from_points() {
        let ray = ConstructionRay::from_points(Vector3::ZERO, Vector3::new(1.0, 1.0, 0.0)).unwrap();
        assert!((ray.angle() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!(ConstructionRay::from_points(Vector3::ZERO, Vector3::ZERO).is_err());
    }

    #[test]
    fn test_line_intersection_in_range() {
        let a = ConstructionLine::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(10.0, 0.0, 0.0));
        let b = ConstructionLine::new(Vector3::new(5.0, -1.0, 0.0), Vector3::new(5.0, 1.0, 0.0));
        let p = a.intersect(&b).unwrap();
        assert!(p.is_close(&Vector3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_line_intersection_out_of_range() {
        let a = ConstructionLine::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(10.0, 0.0, 0.0));
        let b = ConstructionLine::new(Vector3::new(12.0, -1.0, 0.0), Vector3::new(12.0, 1.0, 0.0));
        assert!(a.intersect(&b).is_none());
        let ray = ConstructionRay::new(Vector3::new(12.0, 0.0, 0.0), FRAC_PI_2);
        assert!(a.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_line_touching_end_point() {
        let a = ConstructionLine::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(10.0, 0.0, 0.0));
        let b = ConstructionLine::new(Vector3::new(10.0, 0.0, 0.0), Vector3::new(10.0, 4.0, 0.0));
        assert!(a.intersect(&b).unwrap().is_close(&Vector3::new(10.0, 0.0, 0.0)));
    }
}
