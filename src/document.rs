//! CAD document: entity database, tables and dimension rendering

use crate::database::EntityDb;
use crate::entities::{Entity, EntityType};
use crate::error::{DxfError, Result};
use crate::notification::NotificationCollection;
use crate::render::{self, BlockLayout, DimStyleOverride, DimensionLayout};
use crate::tables::{BlockRecord, DimStyle, Table, TableEntry, TextStyle};
use crate::types::{CoordinateSystem, DxfVersion, Handle};
use rayon::prelude::*;
use tracing::{debug, info};

/// Name of the model space block record
pub const MODEL_SPACE: &str = "*Model_Space";

/// Document wide rendering settings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Text style of dimensions whose style has no DIMTXSTY
    pub default_text_style: String,
    /// Layer of the POINT entities marking defining points
    pub defpoints_layer: String,
    /// Type character of dimension block names (`*D1`, `*D2`, ...)
    pub dimension_block_type: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            default_text_style: "Standard".to_string(),
            defpoints_layer: "Defpoints".to_string(),
            dimension_block_type: 'D',
        }
    }
}

/// The main CAD document
#[derive(Debug, Clone)]
pub struct CadDocument {
    /// Target version, decides which entity features are emitted
    pub version: DxfVersion,
    pub options: RenderOptions,
    /// Diagnostics of all renders
    pub notifications: NotificationCollection,
    /// All entities of all blocks
    pub db: EntityDb,
    pub text_styles: Table<TextStyle>,
    pub dim_styles: Table<DimStyle>,
    /// Block records, each keeping its entity handles in drawing order
    pub block_records: Table<BlockRecord>,
    anonymous_block_counter: u32,
}

impl CadDocument {
    /// Create a new document with the standard table entries
    pub fn new() -> Self {
        let mut doc = CadDocument {
            version: DxfVersion::AC1032,
            options: RenderOptions::default(),
            notifications: NotificationCollection::new(),
            db: EntityDb::new(),
            text_styles: Table::new(),
            dim_styles: Table::new(),
            block_records: Table::new(),
            anonymous_block_counter: 1,
        };
        doc.initialize_defaults();
        doc
    }

    /// Create a document with a specific version
    pub fn with_version(version: DxfVersion) -> Self {
        let mut doc = Self::new();
        doc.version = version;
        doc
    }

    fn initialize_defaults(&mut self) {
        let mut standard_style = TextStyle::standard();
        standard_style.set_handle(self.db.get_unique_handle());
        self.text_styles.add(standard_style).ok();

        let mut standard_dimstyle = DimStyle::standard();
        standard_dimstyle.set_handle(self.db.get_unique_handle());
        self.dim_styles.add(standard_dimstyle).ok();

        let mut model_space = BlockRecord::model_space();
        model_space.set_handle(self.db.get_unique_handle());
        self.block_records.add(model_space).ok();
    }

    /// Define an empty block
    pub fn add_block(&mut self, name: &str) -> Result<Handle> {
        let mut record = BlockRecord::new(name);
        let handle = self.db.get_unique_handle();
        record.set_handle(handle);
        self.block_records.add(record)?;
        Ok(handle)
    }

    /// Define an empty anonymous block named `*<type_char><n>`
    pub fn new_anonymous_block(&mut self, type_char: char) -> Result<String> {
        let name = loop {
            let name = format!("*{}{}", type_char, self.anonymous_block_counter);
            self.anonymous_block_counter += 1;
            if !self.block_records.contains(&name) {
                break name;
            }
        };
        self.add_block(&name)?;
        Ok(name)
    }

    /// Add an entity to model space
    pub fn add_entity(&mut self, entity: EntityType) -> Result<Handle> {
        self.add_entity_to_block(MODEL_SPACE, entity)
    }

    /// Add an entity to block `block`, allocating a handle if it has none
    pub fn add_entity_to_block(&mut self, block: &str, mut entity: EntityType) -> Result<Handle> {
        let record = self
            .block_records
            .get_mut(block)
            .ok_or_else(|| DxfError::UndefinedBlock(block.to_string()))?;
        entity.as_entity_mut().set_owner(record.handle);
        let handle = self.db.add(entity);
        record.entities.push(handle);
        Ok(handle)
    }

    /// Get an entity by handle
    pub fn get_entity(&self, handle: Handle) -> Option<&EntityType> {
        self.db.get(handle)
    }

    /// Get a mutable entity by handle
    pub fn get_entity_mut(&mut self, handle: Handle) -> Option<&mut EntityType> {
        self.db.get_mut(handle)
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.db.len()
    }

    /// Entities of block `name` in drawing order
    pub fn block_entities(&self, name: &str) -> Result<Vec<&EntityType>> {
        let record = self
            .block_records
            .get(name)
            .ok_or_else(|| DxfError::UndefinedBlock(name.to_string()))?;
        Ok(record
            .entities
            .iter()
            .filter_map(|handle| self.db.get(*handle))
            .collect())
    }

    /// Model space entities in drawing order
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.block_records
            .get(MODEL_SPACE)
            .into_iter()
            .flat_map(|record| record.entities.iter())
            .filter_map(|handle| self.db.get(*handle))
    }

    /// Render the DIMENSION entity `handle` into a new anonymous block
    ///
    /// The dimension's points are interpreted in `cs`. `style` replaces the
    /// entity's style and overrides if given. Returns the block name, which
    /// is also stored as the dimension's geometry.
    ///
    /// The anonymous block is allocated after dispatch and layout succeed,
    /// immediately before the primitives are replayed into it, so a failing
    /// render (unknown type, unimplemented type, bad template, undefined
    /// arrow block) leaves no empty block behind.
    pub fn render_dimension(
        &mut self,
        handle: Handle,
        cs: CoordinateSystem,
        style: Option<&DimStyleOverride>,
    ) -> Result<String> {
        let layout = render::compute_layout(self, handle, cs, style)?;
        self.apply_layout(handle, layout)
    }

    /// Render many dimensions, computing the layouts in parallel
    ///
    /// The first failing dimension aborts the batch; dimensions before it
    /// stay rendered.
    pub fn render_dimensions(&mut self, handles: &[Handle], cs: CoordinateSystem) -> Result<Vec<String>> {
        let doc: &CadDocument = self;
        let layouts: Vec<Result<DimensionLayout>> = handles
            .par_iter()
            .map(|handle| render::compute_layout(doc, *handle, cs, None))
            .collect();
        info!(count = handles.len(), "dimension layouts computed");
        handles
            .iter()
            .zip(layouts)
            .map(|(handle, layout)| self.apply_layout(*handle, layout?))
            .collect()
    }

    fn apply_layout(&mut self, handle: Handle, layout: DimensionLayout) -> Result<String> {
        let name = self.new_anonymous_block(self.options.dimension_block_type)?;
        let handles = {
            let mut block = BlockLayout::new(self, &name)?;
            layout.replay(&mut block)?
        };
        let dimension = self
            .db
            .get_mut(handle)
            .and_then(EntityType::as_dimension_mut)
            .ok_or(DxfError::ObjectNotFound(handle.value()))?;
        layout.update.apply(dimension, &name);
        self.notifications.extend(layout.notifications);
        debug!(%handle, block = %name, entities = handles.len(), "dimension rendered");
        Ok(name)
    }
}

impl Default for CadDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Dimension, Line};
    use crate::types::Vector3;

    #[test]
    fn test_new_document_defaults() {
        let doc = CadDocument::new();
        assert!(doc.text_styles.contains("Standard"));
        assert!(doc.dim_styles.contains("standard"));
        assert!(doc.block_records.contains(MODEL_SPACE));
        assert_eq!(doc.entity_count(), 0);
        let handles: Vec<_> = [
            doc.text_styles.get("Standard").map(|s| s.handle),
            doc.dim_styles.get("Standard").map(|s| s.handle),
            doc.block_records.get(MODEL_SPACE).map(|b| b.handle),
        ]
        .into_iter()
        .flatten()
        .collect();
        assert_eq!(handles.len(), 3);
        assert!(handles.iter().all(|h| h.is_valid()));
    }

    #[test]
    fn test_anonymous_block_names() {
        let mut doc = CadDocument::new();
        doc.add_block("*D2").unwrap();
        assert_eq!(doc.new_anonymous_block('D').unwrap(), "*D1");
        assert_eq!(doc.new_anonymous_block('D').unwrap(), "*D3");
        assert_eq!(doc.new_anonymous_block('U').unwrap(), "*U4");
        assert!(matches!(doc.add_block("*d1"), Err(DxfError::DuplicateEntry(_))));
    }

    #[test]
    fn test_add_entity_sets_owner() {
        let mut doc = CadDocument::new();
        let handle = doc
            .add_entity(Line::from_points(Vector3::ZERO, Vector3::UNIT_X).into())
            .unwrap();
        let owner = doc.block_records.get(MODEL_SPACE).map(|b| b.handle);
        assert_eq!(doc.get_entity(handle).map(|e| e.as_entity().owner()), owner);
        assert_eq!(doc.entities().count(), 1);
        assert!(doc
            .add_entity_to_block("Missing", Line::default().into())
            .is_err());
    }

    #[test]
    fn test_render_dimension_updates_entity() {
        let mut doc = CadDocument::new();
        let dim = Dimension::linear(
            Vector3::new(5.0, 3.0, 0.0),
            Vector3::ZERO,
            Vector3::new(10.0, 0.0, 0.0),
            0.0,
        );
        let handle = doc.add_entity(dim.into()).unwrap();
        let name = doc
            .render_dimension(handle, CoordinateSystem::PassThrough, None)
            .unwrap();
        assert_eq!(name, "*D1");

        let dim = doc.get_entity(handle).and_then(|e| e.as_dimension()).unwrap();
        assert_eq!(dim.geometry, "*D1");
        assert!(dim.defpoint.is_close(&Vector3::new(0.0, 3.0, 0.0)));
        assert_eq!(dim.actual_measurement, Some(10.0));
        assert!(!doc.block_entities("*D1").unwrap().is_empty());
        // the closed filled arrow block was defined on first use
        assert!(doc.block_records.contains("_CLOSEDFILLED"));
    }

    #[test]
    fn test_failed_render_creates_no_block() {
        let mut doc = CadDocument::new();
        let mut dim = Dimension::new(crate::entities::DimensionType::Radius);
        dim.defpoint3 = Vector3::UNIT_X;
        let handle = doc.add_entity(dim.into()).unwrap();
        let blocks = doc.block_records.len();
        let err = doc
            .render_dimension(handle, CoordinateSystem::PassThrough, None)
            .unwrap_err();
        assert!(matches!(err, DxfError::NotImplemented(_)));
        assert_eq!(doc.block_records.len(), blocks);
    }
}
