use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::item::{Item, UpdateItem};

/// Keyed in-memory store for items: the single owner of all item state.
///
/// A coarse `RwLock` guards the whole map. Mutations hold the write lock
/// across their check-and-apply step, so the uniqueness scan and the insert
/// are observed as one atomic step; readers never see a half-applied
/// mutation. All operations are synchronous and complete in O(n).
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<HashMap<ItemId, Item>>,
}

fn name_taken(items: &HashMap<ItemId, Item>, name: &str) -> bool {
    items.values().any(|it| !it.deleted && it.name == name)
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, HashMap<ItemId, Item>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::internal("item store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, HashMap<ItemId, Item>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::internal("item store lock poisoned"))
    }

    /// Create a new item with a fresh identifier at version 1.
    pub fn create(&self, name: impl Into<String>, qty: f64) -> DomainResult<Item> {
        let name = name.into();
        // NaN fails this comparison too.
        if !(qty >= 0.0) {
            return Err(DomainError::validation("qty must be a non-negative number"));
        }

        let mut items = self.write()?;
        if name_taken(&items, &name) {
            return Err(DomainError::duplicate("Item with same name already exists"));
        }

        let item = Item::new(ItemId::new(), name, qty);
        items.insert(item.id, item.clone());
        Ok(item)
    }

    /// Copy a live item into a fresh record named `<source>-copy`.
    ///
    /// The derived name is not re-checked against the uniqueness rule; two
    /// duplicates of the same source both succeed with the same name. Pinned
    /// by a test until product intent says otherwise.
    pub fn duplicate(&self, source_id: ItemId) -> DomainResult<Item> {
        let mut items = self.write()?;
        let (name, qty) = match items.get(&source_id) {
            Some(it) if !it.deleted => (it.name.clone(), it.qty),
            _ => return Err(DomainError::not_found("Source item not found")),
        };

        let copy = Item::new(ItemId::new(), format!("{name}-copy"), qty);
        items.insert(copy.id, copy.clone());
        Ok(copy)
    }

    /// All live (non-deleted) records. Order is unspecified.
    pub fn list(&self) -> DomainResult<Vec<Item>> {
        let items = self.read()?;
        Ok(items.values().filter(|it| !it.deleted).cloned().collect())
    }

    pub fn get(&self, id: ItemId) -> DomainResult<Item> {
        let items = self.read()?;
        match items.get(&id) {
            Some(it) if !it.deleted => Ok(it.clone()),
            _ => Err(DomainError::not_found("Item not found")),
        }
    }

    /// Apply a partial update, bumping the version on success.
    ///
    /// Every supplied field is validated before any of them is committed: a
    /// rejected field leaves the record entirely untouched, version included.
    /// An empty patch is still a mutation and bumps the version.
    pub fn update(&self, id: ItemId, changes: UpdateItem) -> DomainResult<Item> {
        let mut items = self.write()?;
        let mut item = match items.get(&id) {
            Some(it) if !it.deleted => it.clone(),
            _ => return Err(DomainError::not_found("Item not found")),
        };

        changes.expected_version.check(item.version)?;

        if let Some(name) = &changes.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name must be a non-empty string"));
            }
            if *name != item.name && name_taken(&items, name) {
                return Err(DomainError::duplicate("Item with same name already exists"));
            }
        }
        if let Some(qty) = changes.qty {
            if !(qty >= 0.0) {
                return Err(DomainError::validation("qty must be a non-negative number"));
            }
        }

        if let Some(name) = changes.name {
            item.name = name;
        }
        if let Some(qty) = changes.qty {
            item.qty = qty;
        }
        item.version += 1;
        items.insert(id, item.clone());
        Ok(item)
    }

    /// Transition a live item from unpublished to published, exactly once.
    pub fn publish(&self, id: ItemId) -> DomainResult<Item> {
        let mut items = self.write()?;
        let item = match items.get_mut(&id) {
            Some(it) if !it.deleted => it,
            _ => return Err(DomainError::not_found("Item not found")),
        };

        if item.published {
            return Err(DomainError::invalid_state("Already published"));
        }

        item.published = true;
        item.version += 1;
        Ok(item.clone())
    }

    /// Mark a live item deleted. The identifier stays allocated but the
    /// record becomes invisible to everything except `hard_delete`.
    pub fn soft_delete(&self, id: ItemId) -> DomainResult<Item> {
        let mut items = self.write()?;
        let item = match items.get_mut(&id) {
            Some(it) if !it.deleted => it,
            _ => return Err(DomainError::not_found("Item not found or already deleted")),
        };

        item.deleted = true;
        item.version += 1;
        Ok(item.clone())
    }

    /// Remove a record entirely, soft-deleted or not.
    pub fn hard_delete(&self, id: ItemId) -> DomainResult<ItemId> {
        let mut items = self.write()?;
        match items.remove(&id) {
            Some(_) => Ok(id),
            None => Err(DomainError::not_found("Item not found")),
        }
    }
}
