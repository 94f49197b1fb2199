//! Block record table entry

use super::TableEntry;
use crate::types::Handle;

/// A block record table entry
///
/// The block's entities live in the document's entity database; the record
/// keeps their handles in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    /// Unique handle for the block record table entry
    pub handle: Handle,
    /// Block name
    pub name: String,
    /// Base point of the block definition
    pub base_point: crate::types::Vector3,
    /// Handles of the entities owned by this block, in drawing order
    pub entities: Vec<Handle>,
}

impl BlockRecord {
    /// Create a new block record
    pub fn new(name: impl Into<String>) -> Self {
        BlockRecord {
            handle: Handle::NULL,
            name: name.into(),
            base_point: crate::types::Vector3::ZERO,
            entities: Vec::new(),
        }
    }

    /// Create the model space block record
    pub fn model_space() -> Self {
        Self::new("*Model_Space")
    }

    /// Anonymous blocks have names starting with `*`, e.g. `*D12`
    pub fn is_anonymous(&self) -> bool {
        self.name.starts_with('*') && !self.is_layout()
    }

    /// Model and paper space are layouts, not plain blocks
    pub fn is_layout(&self) -> bool {
        let upper = self.name.to_uppercase();
        upper == "*MODEL_SPACE" || upper.starts_with("*PAPER_SPACE")
    }

    /// Number of entities in the block
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl TableEntry for BlockRecord {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_standard(&self) -> bool {
        self.is_layout()
    }
}
