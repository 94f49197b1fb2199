//! Entity database: the handle keyed store of all drawing entities
//!
//! Entities have no order in the database; block records keep the drawing
//! order of their entities as handle lists.

use crate::entities::EntityType;
use crate::error::{DxfError, Result};
use crate::types::{Handle, HandleGenerator};
use ahash::AHashMap;
use tracing::{debug, trace};

/// Handle keyed store of drawing entities
#[derive(Debug, Clone, Default)]
pub struct EntityDb {
    entities: AHashMap<Handle, EntityType>,
    handles: HandleGenerator,
}

impl EntityDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Database whose handle generator starts at `seed` (`$HANDSEED`)
    pub fn with_seed(seed: u64) -> Self {
        EntityDb {
            entities: AHashMap::new(),
            handles: HandleGenerator::with_seed(seed),
        }
    }

    /// Get an entity by handle
    pub fn get(&self, handle: Handle) -> Option<&EntityType> {
        self.entities.get(&handle)
    }

    /// Get a mutable entity by handle
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut EntityType> {
        self.entities.get_mut(&handle)
    }

    /// Store an entity under `handle`, replacing a previous entry
    ///
    /// The entity's own handle is set to `handle`.
    pub fn insert(&mut self, handle: Handle, mut entity: EntityType) -> Option<EntityType> {
        entity.as_entity_mut().set_handle(handle);
        self.entities.insert(handle, entity)
    }

    /// Add an entity, allocating a new handle if it has none
    pub fn add(&mut self, entity: EntityType) -> Handle {
        let handle = match entity.handle() {
            h if h.is_valid() => h,
            _ => self.get_unique_handle(),
        };
        trace!(%handle, entity = entity.entity_type(), "add entity");
        self.insert(handle, entity);
        handle
    }

    /// Database contains handle?
    pub fn contains(&self, handle: Handle) -> bool {
        self.entities.contains_key(&handle)
    }

    /// Remove an entity, returns it if it existed
    pub fn remove(&mut self, handle: Handle) -> Option<EntityType> {
        self.entities.remove(&handle)
    }

    /// Remove an entity, fails for unknown handles
    pub fn delete_handle(&mut self, handle: Handle) -> Result<()> {
        self.remove(handle)
            .map(|_| ())
            .ok_or(DxfError::ObjectNotFound(handle.value()))
    }

    /// Count of database items
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all handles
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.entities.keys().copied()
    }

    /// Iterate over all entities
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.values()
    }

    /// Iterate over all (handle, entity) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &EntityType)> {
        self.entities.iter().map(|(h, e)| (*h, e))
    }

    /// Next handle that is not in use
    ///
    /// The generator seed may come from a file and can not be trusted, so
    /// handles already in the database are skipped.
    pub fn get_unique_handle(&mut self) -> Handle {
        loop {
            let handle = self.handles.next();
            if !self.entities.contains_key(&handle) {
                return handle;
            }
        }
    }

    /// Copy an entity under a new unique handle and add the copy
    ///
    /// The owner of the copy is unchanged; linking it into a block is up to
    /// the caller.
    pub fn duplicate(&mut self, handle: Handle) -> Result<Handle> {
        let mut copy = self
            .get(handle)
            .cloned()
            .ok_or(DxfError::ObjectNotFound(handle.value()))?;
        let new_handle = self.get_unique_handle();
        copy.as_entity_mut().set_handle(new_handle);
        debug!(source = %handle, copy = %new_handle, "duplicate entity");
        self.insert(new_handle, copy);
        Ok(new_handle)
    }
}
