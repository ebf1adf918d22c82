use serde::Deserialize;
use serde_json::Value;

use stockroom_items::Item;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// Test scaffolding: `?fail=dep` simulates an unavailable upstream.
    pub fail: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Names of required fields absent from a JSON request body.
///
/// A field set to `null` counts as present; only truly missing keys are
/// reported.
pub fn missing_fields(body: &Value, fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .filter(|f| body.get(**f).is_none())
        .map(|f| (*f).to_string())
        .collect()
}

pub fn item_to_json(item: &Item) -> Value {
    serde_json::json!({
        "id": item.id.to_string(),
        "name": item.name,
        "qty": item.qty,
        "version": item.version,
        "deleted": item.deleted,
        "published": item.published,
    })
}
