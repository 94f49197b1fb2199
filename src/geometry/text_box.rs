//! Rotated rectangle around dimension text

use super::ConstructionLine;
use crate::types::vector::sorted_unique;
use crate::types::Vector3;
use std::fmt;

/// Rectangle around a text midpoint, inflated by a gap on every side
///
/// Corners are lower left, lower right, upper right, upper left in the
/// rotated frame of the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub center: Vector3,
    pub corners: [Vector3; 4],
}

impl TextBox {
    /// `angle` is the text rotation in radians
    pub fn new(center: Vector3, width: f64, height: f64, angle: f64, gap: f64) -> Self {
        let w2 = Vector3::from_angle(angle, width / 2.0 + gap);
        let h2 = Vector3::from_angle(angle + std::f64::consts::FRAC_PI_2, height / 2.0 + gap);
        TextBox {
            center,
            corners: [
                center - w2 - h2,
                center + w2 - h2,
                center + w2 + h2,
                center - w2 + h2,
            ],
        }
    }

    /// Bottom, right, top and left border
    pub fn border_lines(&self) -> [ConstructionLine; 4] {
        let [p1, p2, p3, p4] = self.corners;
        [
            ConstructionLine::new(p1, p2),
            ConstructionLine::new(p2, p3),
            ConstructionLine::new(p3, p4),
            ConstructionLine::new(p4, p1),
        ]
    }

    /// Intersection points of `line` with the border, sorted, without duplicates
    ///
    /// A line through a corner hits two borders in the same point, which is
    /// reported once.
    pub fn intersect(&self, line: &ConstructionLine) -> Vec<Vector3> {
        let points = self
            .border_lines()
            .iter()
            .filter_map(|border| line.intersect(border))
            .collect();
        sorted_unique(points)
    }
}

impl fmt::Display for TextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.corners;
        write!(f, "TextBox({}, {}, {}, {})", a, b, c, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_corners_axis_aligned() {
        let tb = TextBox::new(Vector3::ZERO, 4.0, 2.0, 0.0, 0.5);
        assert!(tb.corners[0].is_close(&Vector3::new(-2.5, -1.5, 0.0)));
        assert!(tb.corners[1].is_close(&Vector3::new(2.5, -1.5, 0.0)));
        assert!(tb.corners[2].is_close(&Vector3::new(2.5, 1.5, 0.0)));
        assert!(tb.corners[3].is_close(&Vector3::new(-2.5, 1.5, 0.0)));
    }

    #[test]
    fn test_corners_rotated() {
        let tb = TextBox::new(Vector3::ZERO, 4.0, 2.0, FRAC_PI_2, 0.0);
        // lower left in the rotated frame
        assert!(tb.corners[0].is_close(&Vector3::new(1.0, -2.0, 0.0)));
        assert!(tb.corners[2].is_close(&Vector3::new(-1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_intersect_outside() {
        let tb = TextBox::new(Vector3::new(5.0, 5.0, 0.0), 2.0, 1.0, 0.0, 0.0);
        let line = ConstructionLine::new(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
        assert!(tb.intersect(&line).is_empty());
    }

    #[test]
    fn test_intersect_through() {
        let tb = TextBox::new(Vector3::new(5.0, 0.0, 0.0), 2.0, 1.0, 0.0, 0.0);
        let line = ConstructionLine::new(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
        let points = tb.intersect(&line);
        assert_eq!(points.len(), 2);
        assert!(points[0].is_close(&Vector3::new(4.0, 0.0, 0.0)));
        assert!(points[1].is_close(&Vector3::new(6.0, 0.0, 0.0)));
    }

    #[test]
    fn test_intersect_corner_once() {
        let tb = TextBox::new(Vector3::new(1.0, 1.0, 0.0), 2.0, 2.0, 0.0, 0.0);
        // touches only the lower left corner
        let line = ConstructionLine::new(Vector3::new(-1.0, 1.0, 0.0), Vector3::new(1.0, -1.0, 0.0));
        assert_eq!(tb.intersect(&line).len(), 1);
    }
}
