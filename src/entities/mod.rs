//! Drawing entities
//!
//! The renderer emits the primitive entities (points, lines, circles, solids,
//! text and block references); the [`Dimension`] entity is its input.

use crate::types::{BoundingBox3D, Color, Handle, LineWeight, Vector3};

pub mod circle;
pub mod dimension;
pub mod insert;
pub mod line;
pub mod mtext;
pub mod point;
pub mod solid;
pub mod text;

pub use circle::Circle;
pub use dimension::{Dimension, DimensionFlags, DimensionType};
pub use insert::Insert;
pub use line::Line;
pub use mtext::{AttachmentPoint, MText};
pub use point::Point;
pub use solid::Solid;
pub use text::{Text, TextHorizontalAlignment, TextVerticalAlignment};

/// Base trait for all drawing entities
pub trait Entity {
    /// Shared entity data
    fn common(&self) -> &EntityCommon;

    /// Shared entity data, mutable
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// Get the entity type name
    fn entity_type(&self) -> &'static str;

    /// Get the bounding box of the entity
    fn bounding_box(&self) -> BoundingBox3D;

    /// Move the entity by a translation vector
    fn translate(&mut self, offset: Vector3);

    /// Get the entity's unique handle
    fn handle(&self) -> Handle {
        self.common().handle
    }

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle) {
        self.common_mut().handle = handle;
    }

    /// Handle of the owning block record
    fn owner(&self) -> Handle {
        self.common().owner
    }

    fn set_owner(&mut self, owner: Handle) {
        self.common_mut().owner = owner;
    }

    /// Get the entity's layer name
    fn layer(&self) -> &str {
        &self.common().layer
    }

    fn set_layer(&mut self, layer: String) {
        self.common_mut().layer = layer;
    }

    fn color(&self) -> Color {
        self.common().color
    }

    fn set_color(&mut self, color: Color) {
        self.common_mut().color = color;
    }

    fn line_weight(&self) -> LineWeight {
        self.common().line_weight
    }

    fn set_line_weight(&mut self, weight: LineWeight) {
        self.common_mut().line_weight = weight;
    }
}

/// Common entity data shared by all entities
///
/// Also serves as the attribute set the renderer stamps on the primitives it
/// creates; a null handle is replaced when the entity is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle
    pub handle: Handle,
    /// Owning block record
    pub owner: Handle,
    /// Layer name
    pub layer: String,
    /// Color
    pub color: Color,
    /// Linetype name, `None` is BYLAYER
    pub linetype: Option<String>,
    /// Line weight
    pub line_weight: LineWeight,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            owner: Handle::NULL,
            layer: "0".to_string(),
            color: Color::ByLayer,
            linetype: None,
            line_weight: LineWeight::ByLayer,
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }

    /// Builder: Set the color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: Set the linetype name
    pub fn with_linetype(mut self, linetype: impl Into<String>) -> Self {
        self.linetype = Some(linetype.into());
        self
    }

    /// Builder: Set the line weight
    pub fn with_line_weight(mut self, weight: LineWeight) -> Self {
        self.line_weight = weight;
        self
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    /// Point entity
    Point(Point),
    /// Line entity
    Line(Line),
    /// Circle entity
    Circle(Circle),
    /// Filled triangle or quadrilateral
    Solid(Solid),
    /// Text entity
    Text(Text),
    /// Multi-line text entity
    MText(MText),
    /// Insert entity (block reference)
    Insert(Insert),
    /// Dimension entity
    Dimension(Dimension),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Dimension(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Dimension(e) => e,
        }
    }

    pub fn handle(&self) -> Handle {
        self.as_entity().handle()
    }

    pub fn entity_type(&self) -> &'static str {
        self.as_entity().entity_type()
    }

    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            EntityType::Dimension(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dimension_mut(&mut self) -> Option<&mut Dimension> {
        match self {
            EntityType::Dimension(d) => Some(d),
            _ => None,
        }
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for EntityType {
                fn from(entity: $variant) -> Self {
                    EntityType::$variant(entity)
                }
            }
        )*
    };
}

impl_from_entity!(Point, Line, Circle, Solid, Text, MText, Insert, Dimension);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_builders() {
        let common = EntityCommon::with_layer("DIM")
            .with_color(Color::RED)
            .with_linetype("DASHED")
            .with_line_weight(LineWeight::ByBlock);
        assert_eq!(common.layer, "DIM");
        assert_eq!(common.color, Color::RED);
        assert_eq!(common.linetype.as_deref(), Some("DASHED"));
        assert_eq!(common.line_weight, LineWeight::ByBlock);
        assert!(common.handle.is_null());
    }

    #[test]
    fn test_entity_type_dispatch() {
        let mut entity = EntityType::from(Line::from_points(Vector3::ZERO, Vector3::UNIT_X));
        entity.as_entity_mut().set_handle(Handle::new(0x2A));
        assert_eq!(entity.handle(), Handle::new(0x2A));
        assert_eq!(entity.entity_type(), "LINE");
        assert!(entity.as_dimension().is_none());
    }
}
