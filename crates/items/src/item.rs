use serde::{Deserialize, Serialize};

use stockroom_core::{ExpectedVersion, ItemId};

/// A stored item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Non-negative quantity (JSON number semantics; fractional allowed).
    pub qty: f64,
    /// Optimistic-concurrency token: 1 at creation, +1 per accepted mutation.
    pub version: u64,
    /// Soft-deletion flag. Once set, the record is invisible to every
    /// operation except hard deletion; there is no undelete.
    pub deleted: bool,
    /// One-way false→true lifecycle flag.
    pub published: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, name: String, qty: f64) -> Self {
        Self {
            id,
            name,
            qty,
            version: 1,
            deleted: false,
            published: false,
        }
    }
}

/// Partial-update patch for an item.
///
/// Absent fields are left unchanged. An empty patch is still an accepted
/// mutation and bumps the version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub qty: Option<f64>,
    pub expected_version: ExpectedVersion,
}
