//! Render output: primitive commands, the entity update and the block sink
//!
//! Layout engines do not touch the document. They return a
//! [`DimensionLayout`] whose commands carry finished entities in their final
//! coordinates; the dispatcher replays them onto a [`LayoutSink`] and applies
//! the [`DimensionUpdate`] to the DIMENSION entity.

use super::arrows::{self, ShapePart};
use crate::document::CadDocument;
use crate::entities::{Circle, Dimension, EntityCommon, EntityType, Insert, Line, MText, Point, Solid, Text};
use crate::error::{DxfError, Result};
use crate::notification::Notification;
use crate::types::{Color, Handle, Vector3};
use tracing::trace;

/// One primitive to add to the dimension block
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Line(Line),
    Point(Point),
    Text(Text),
    MText(MText),
    Solid(Solid),
    Circle(Circle),
    /// Reference to a user defined block
    BlockRef(Insert),
    /// Reference to a standard arrow, `block_name` holds the arrow name
    ArrowBlockRef(Insert),
}

impl RenderCommand {
    /// Add the primitive to `sink`
    pub fn replay(&self, sink: &mut dyn LayoutSink) -> Result<Handle> {
        match self {
            RenderCommand::Line(line) => sink.add_line(line.clone()),
            RenderCommand::Point(point) => sink.add_point(point.clone()),
            RenderCommand::Text(text) => sink.add_text(text.clone()),
            RenderCommand::MText(mtext) => sink.add_mtext(mtext.clone()),
            RenderCommand::Solid(solid) => sink.add_solid(solid.clone()),
            RenderCommand::Circle(circle) => sink.add_circle(circle.clone()),
            RenderCommand::BlockRef(insert) => sink.add_blockref(insert.clone()),
            RenderCommand::ArrowBlockRef(insert) => sink.add_arrow_blockref(insert.clone()),
        }
    }

    /// DXF type name of the produced entity
    pub fn entity_type(&self) -> &'static str {
        match self {
            RenderCommand::Line(_) => "LINE",
            RenderCommand::Point(_) => "POINT",
            RenderCommand::Text(_) => "TEXT",
            RenderCommand::MText(_) => "MTEXT",
            RenderCommand::Solid(_) => "SOLID",
            RenderCommand::Circle(_) => "CIRCLE",
            RenderCommand::BlockRef(_) | RenderCommand::ArrowBlockRef(_) => "INSERT",
        }
    }

    /// Command for an arrow shape part whose coordinates are final
    pub fn from_shape(part: ShapePart, common: EntityCommon, normal: Vector3) -> Self {
        match part {
            ShapePart::Line(start, end) => RenderCommand::Line(Line {
                common,
                ..Line::from_points(start, end)
            }),
            ShapePart::Solid(corners) => RenderCommand::Solid(Solid {
                common,
                corners,
                normal,
            }),
            ShapePart::Circle { center, radius } => RenderCommand::Circle(Circle {
                common,
                normal,
                ..Circle::from_center_radius(center, radius)
            }),
        }
    }
}

/// Changes to the DIMENSION entity produced by a render
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionUpdate {
    /// Start of the dimension line (WCS)
    pub defpoint: Vector3,
    /// Extension line 1 origin (WCS)
    pub defpoint2: Vector3,
    /// Extension line 2 origin (WCS)
    pub defpoint3: Vector3,
    /// Text midpoint (OCS)
    pub text_midpoint: Vector3,
    /// Set if the drawing plane is not the xy-plane
    pub extrusion: Option<Vector3>,
    /// Measured distance before DIMLFAC
    pub actual_measurement: f64,
}

impl DimensionUpdate {
    /// Write the update and the geometry block name to `dimension`
    pub fn apply(&self, dimension: &mut Dimension, geometry: &str) {
        dimension.geometry = geometry.to_string();
        dimension.defpoint = self.defpoint;
        dimension.defpoint2 = self.defpoint2;
        dimension.defpoint3 = self.defpoint3;
        dimension.text_midpoint = self.text_midpoint;
        if let Some(extrusion) = self.extrusion {
            dimension.extrusion = extrusion;
        }
        dimension.actual_measurement = Some(self.actual_measurement);
    }
}

/// Result of laying out one dimension
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLayout {
    /// Primitives in drawing order
    pub commands: Vec<RenderCommand>,
    pub update: DimensionUpdate,
    /// Diagnostics collected while resolving the style
    pub notifications: Vec<Notification>,
}

impl DimensionLayout {
    /// Add all primitives to `sink` in order
    pub fn replay(&self, sink: &mut dyn LayoutSink) -> Result<Vec<Handle>> {
        self.commands.iter().map(|cmd| cmd.replay(sink)).collect()
    }

    /// Commands of one entity type, e.g. `"LINE"`
    pub fn commands_of_type(&self, entity_type: &str) -> impl Iterator<Item = &RenderCommand> + '_ {
        let entity_type = entity_type.to_string();
        self.commands
            .iter()
            .filter(move |cmd| cmd.entity_type() == entity_type)
    }
}

/// Append-only target for rendered primitives
pub trait LayoutSink {
    fn add_line(&mut self, line: Line) -> Result<Handle>;

    fn add_point(&mut self, point: Point) -> Result<Handle>;

    fn add_text(&mut self, text: Text) -> Result<Handle>;

    fn add_mtext(&mut self, mtext: MText) -> Result<Handle>;

    fn add_solid(&mut self, solid: Solid) -> Result<Handle>;

    fn add_circle(&mut self, circle: Circle) -> Result<Handle>;

    /// Reference a defined block, fails with [`DxfError::UndefinedBlock`]
    fn add_blockref(&mut self, insert: Insert) -> Result<Handle>;

    /// Reference a standard arrow by name, defining its block if needed
    fn add_arrow_blockref(&mut self, insert: Insert) -> Result<Handle>;

    /// Draw arrow `name` from its shape parts instead of a block reference
    fn add_arrow(
        &mut self,
        name: &str,
        insert: Vector3,
        rotation: f64,
        size: f64,
        attribs: &EntityCommon,
    ) -> Result<Vec<Handle>> {
        let mut handles = Vec::new();
        for part in arrows::shape(name, insert, size, rotation) {
            let common = attribs.clone();
            let handle = match part {
                ShapePart::Line(start, end) => self.add_line(Line {
                    common,
                    ..Line::from_points(start, end)
                })?,
                ShapePart::Solid(corners) => self.add_solid(Solid {
                    common,
                    ..Solid::new(corners[0], corners[1], corners[2], corners[3])
                })?,
                ShapePart::Circle { center, radius } => self.add_circle(Circle {
                    common,
                    ..Circle::from_center_radius(center, radius)
                })?,
            };
            handles.push(handle);
        }
        Ok(handles)
    }
}

/// Sink adding entities to a block record of a document
pub struct BlockLayout<'a> {
    doc: &'a mut CadDocument,
    name: String,
}

impl<'a> BlockLayout<'a> {
    /// Sink for the existing block `name`
    pub fn new(doc: &'a mut CadDocument, name: &str) -> Result<Self> {
        let name = doc
            .block_records
            .get(name)
            .map(|record| record.name.clone())
            .ok_or_else(|| DxfError::UndefinedBlock(name.to_string()))?;
        Ok(BlockLayout { doc, name })
    }

    /// Name of the target block
    pub fn name(&self) -> &str {
        &self.name
    }

    fn add_entity(&mut self, entity: EntityType) -> Result<Handle> {
        self.doc.add_entity_to_block(&self.name, entity)
    }
}

impl LayoutSink for BlockLayout<'_> {
    fn add_line(&mut self, line: Line) -> Result<Handle> {
        self.add_entity(line.into())
    }

    fn add_point(&mut self, point: Point) -> Result<Handle> {
        self.add_entity(point.into())
    }

    fn add_text(&mut self, text: Text) -> Result<Handle> {
        self.add_entity(text.into())
    }

    fn add_mtext(&mut self, mtext: MText) -> Result<Handle> {
        self.add_entity(mtext.into())
    }

    fn add_solid(&mut self, solid: Solid) -> Result<Handle> {
        self.add_entity(solid.into())
    }

    fn add_circle(&mut self, circle: Circle) -> Result<Handle> {
        self.add_entity(circle.into())
    }

    fn add_blockref(&mut self, insert: Insert) -> Result<Handle> {
        if !self.doc.block_records.contains(&insert.block_name) {
            return Err(DxfError::UndefinedBlock(insert.block_name));
        }
        self.add_entity(insert.into())
    }

    fn add_arrow_blockref(&mut self, mut insert: Insert) -> Result<Handle> {
        let arrow = arrows::get(&insert.block_name)
            .ok_or_else(|| DxfError::UndefinedBlock(insert.block_name.clone()))?;
        let block_name = arrow.block_name();
        if !self.doc.block_records.contains(&block_name) {
            trace!(block = %block_name, "define arrow block");
            self.doc.add_block(&block_name)?;
            let mut definition = BlockLayout::new(&mut *self.doc, &block_name)?;
            let attribs = EntityCommon::new().with_color(Color::ByBlock);
            definition.add_arrow(arrow.name, Vector3::ZERO, 0.0, 1.0, &attribs)?;
        }
        insert.block_name = block_name;
        self.add_entity(insert.into())
    }
}
