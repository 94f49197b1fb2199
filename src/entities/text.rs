//! Single-line text entity, used for dimension text in R12 drawings

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox3D, Vector3};

/// Text horizontal alignment (group code 72)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHorizontalAlignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
    /// Fit between two points, adjust height
    Aligned = 3,
    /// Centered horizontally and vertically
    Middle = 4,
    /// Fit between two points, keep height
    Fit = 5,
}

/// Text vertical alignment (group code 73)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVerticalAlignment {
    #[default]
    Baseline = 0,
    Bottom = 1,
    Middle = 2,
    Top = 3,
}

/// A single-line text entity, points in OCS
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content
    pub value: String,
    /// Insertion point (first alignment point)
    pub insertion_point: Vector3,
    /// Second alignment point, used by every alignment except left/baseline
    pub alignment_point: Option<Vector3>,
    /// Text height
    pub height: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Width scale factor
    pub width_factor: f64,
    /// Text style name
    pub style: String,
    pub horizontal_alignment: TextHorizontalAlignment,
    pub vertical_alignment: TextVerticalAlignment,
    /// Normal vector
    pub normal: Vector3,
}

impl Text {
    /// Create a new text entity
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            common: EntityCommon::new(),
            value: value.into(),
            insertion_point: Vector3::ZERO,
            alignment_point: None,
            height: 1.0,
            rotation: 0.0,
            width_factor: 1.0,
            style: "Standard".to_string(),
            horizontal_alignment: TextHorizontalAlignment::Left,
            vertical_alignment: TextVerticalAlignment::Baseline,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Place the text at `pos` with the given alignment
    ///
    /// Aligned text stores the position in both alignment points.
    pub fn set_pos(
        &mut self,
        pos: Vector3,
        horizontal: TextHorizontalAlignment,
        vertical: TextVerticalAlignment,
    ) {
        self.insertion_point = pos;
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self.alignment_point = if horizontal == TextHorizontalAlignment::Left
            && vertical == TextVerticalAlignment::Baseline
        {
            None
        } else {
            Some(pos)
        };
    }

    /// Rough text width from height, width factor and character count
    pub fn approximate_width(&self) -> f64 {
        self.value.chars().count() as f64 * self.height * self.width_factor
    }
}

impl Entity for Text {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "TEXT"
    }

    fn bounding_box(&self) -> BoundingBox3D {
        let width = self.approximate_width();
        let corner = self.insertion_point
            + Vector3::from_angle(self.rotation, width)
            + Vector3::from_angle(self.rotation + std::f64::consts::FRAC_PI_2, self.height);
        BoundingBox3D::from_point(self.insertion_point).merge(&BoundingBox3D::from_point(corner))
    }

    fn translate(&mut self, offset: Vector3) {
        self.insertion_point = self.insertion_point + offset;
        if let Some(p) = self.alignment_point.as_mut() {
            *p = *p + offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pos_middle_center() {
        let mut text = Text::new("12.5");
        text.set_pos(
            Vector3::new(5.0, 1.0, 0.0),
            TextHorizontalAlignment::Center,
            TextVerticalAlignment::Middle,
        );
        assert_eq!(text.alignment_point, Some(Vector3::new(5.0, 1.0, 0.0)));
        assert_eq!(text.horizontal_alignment as i16, 1);
        assert_eq!(text.vertical_alignment as i16, 2);
    }

    #[test]
    fn test_translate_moves_both_points() {
        let mut text = Text::new("x");
        text.set_pos(
            Vector3::ZERO,
            TextHorizontalAlignment::Center,
            TextVerticalAlignment::Middle,
        );
        text.translate(Vector3::UNIT_X);
        assert_eq!(text.insertion_point, Vector3::UNIT_X);
        assert_eq!(text.alignment_point, Some(Vector3::UNIT_X));
        assert_eq!(text.approximate_width(), 1.0);
    }
}
