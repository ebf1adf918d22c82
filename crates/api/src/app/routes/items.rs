use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use stockroom_core::{DomainError, ExpectedVersion, ItemId};
use stockroom_items::UpdateItem;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/:id", get(get_item).put(update_item).delete(soft_delete_item))
        .route("/:id/duplicate", post(duplicate_item))
        .route("/:id/publish", put(publish_item))
        .route("/:id/force", delete(hard_delete_item))
}

/// Identifiers are opaque: a path segment that is not a well-formed id can
/// never name a record, so it maps to the same not-found failure a lookup
/// miss would produce.
fn parse_id(raw: &str, not_found_message: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::domain_error_to_response(DomainError::not_found(not_found_message)))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Option<Json<Value>>,
) -> axum::response::Response {
    let body = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));

    let missing = dto::missing_fields(&body, &["name", "qty"]);
    if !missing.is_empty() {
        return errors::domain_error_to_response(DomainError::validation_with_details(
            "Missing required fields",
            json!({ "missing": missing }),
        ));
    }

    // Test scaffolding: simulated handler crash.
    if body.get("cause").and_then(Value::as_str) == Some("crash") {
        return errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Simulated server crash",
            None,
        );
    }

    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return errors::domain_error_to_response(DomainError::validation("name must be a string"));
    };
    let Some(qty) = body.get("qty").and_then(Value::as_f64) else {
        return errors::domain_error_to_response(DomainError::validation(
            "qty must be a non-negative number",
        ));
    };

    match services.items.create(name, qty) {
        Ok(item) => errors::json_success(
            StatusCode::CREATED,
            json!({ "item": dto::item_to_json(&item) }),
            Some("Created"),
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn duplicate_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "Source item not found") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match services.items.duplicate(id) {
        Ok(copy) => errors::json_success(
            StatusCode::CREATED,
            json!({ "item": dto::item_to_json(&copy) }),
            Some("Duplicated"),
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListItemsQuery>,
) -> axum::response::Response {
    // Test scaffolding: simulated upstream dependency failure.
    if query.fail.as_deref() == Some("dep") {
        return errors::json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "DEPENDENCY_UNAVAILABLE",
            "Upstream service unavailable",
            None,
        );
    }

    match services.items.list() {
        Ok(items) => {
            let items: Vec<Value> = items.iter().map(dto::item_to_json).collect();
            errors::json_success(StatusCode::OK, json!({ "items": items }), None)
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "Item not found") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match services.items.get(id) {
        Ok(item) => errors::json_success(
            StatusCode::OK,
            json!({ "item": dto::item_to_json(&item) }),
            None,
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> axum::response::Response {
    let id = match parse_id(&id, "Item not found") {
        Ok(id) => id,
        Err(res) => return res,
    };
    let body = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));

    let mut changes = UpdateItem::default();
    if let Some(value) = body.get("name") {
        let Some(name) = value.as_str() else {
            return errors::domain_error_to_response(DomainError::validation(
                "name must be a non-empty string",
            ));
        };
        changes.name = Some(name.to_string());
    }
    if let Some(value) = body.get("qty") {
        let Some(qty) = value.as_f64() else {
            return errors::domain_error_to_response(DomainError::validation(
                "qty must be a non-negative number",
            ));
        };
        changes.qty = Some(qty);
    }
    if let Some(value) = body.get("expectedVersion") {
        let Some(version) = value.as_u64() else {
            return errors::domain_error_to_response(DomainError::validation(
                "expectedVersion must be a non-negative integer",
            ));
        };
        changes.expected_version = ExpectedVersion::Exact(version);
    }

    match services.items.update(id, changes) {
        Ok(item) => errors::json_success(
            StatusCode::OK,
            json!({ "item": dto::item_to_json(&item) }),
            Some("Updated"),
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn publish_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "Item not found") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match services.items.publish(id) {
        Ok(item) => errors::json_success(
            StatusCode::OK,
            json!({ "item": dto::item_to_json(&item) }),
            Some("Published"),
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn soft_delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "Item not found or already deleted") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match services.items.soft_delete(id) {
        Ok(item) => errors::json_success(
            StatusCode::OK,
            json!({ "id": item.id.to_string() }),
            Some("Soft-deleted"),
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn hard_delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "Item not found") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match services.items.hard_delete(id) {
        Ok(id) => errors::json_success(
            StatusCode::OK,
            json!({ "id": id.to_string() }),
            Some("Hard-deleted"),
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}
