use axum::extract::{Extension, Path};
use serde_json::{json, Map, Value};

use crate::api::format::document_to_api_value;
use crate::database::{Database, DocumentId, Repository};
use crate::error::{ApiError, StoreResultExt};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::models::{College, COLLEGES};

const NOT_FOUND: &str = "College not found";

/// Update and delete address colleges by store-native id only. Anything
/// else cannot match a document, so it is a 404 without a store round-trip.
fn native_id(raw: &str) -> Result<DocumentId, ApiError> {
    DocumentId::native(raw).ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

/// GET /colleges/:id - Get a single college
///
/// Unlike update and delete, lookup accepts either a native id or any
/// string `_id` (colleges created with their own `_id`).
pub async fn get(
    Path(id): Path<String>,
    Extension(db): Extension<Database>,
) -> ApiResult<Value> {
    let id = DocumentId::lenient(&id);
    let document = Repository::new(COLLEGES, db)
        .select_404(&id)
        .await
        .or_api_error(NOT_FOUND, "Failed to fetch college")?;

    Ok(ApiResponse::success(document_to_api_value(document)))
}

/// PUT /colleges/:id - Set the supplied fields on a college
pub async fn put(
    Path(id): Path<String>,
    Extension(db): Extension<Database>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> ApiResult<Value> {
    let changes = College::from_payload(payload)?.into_changes()?;
    let id = native_id(&id)?;

    Repository::new(COLLEGES, db)
        .update_404(&id, changes)
        .await
        .or_api_error(NOT_FOUND, "Failed to update college")?;

    Ok(ApiResponse::success(json!({ "message": "College updated successfully" })))
}

/// DELETE /colleges/:id - Remove a college
pub async fn delete(
    Path(id): Path<String>,
    Extension(db): Extension<Database>,
) -> ApiResult<Value> {
    let id = native_id(&id)?;

    Repository::new(COLLEGES, db)
        .delete_404(&id)
        .await
        .or_api_error(NOT_FOUND, "Failed to delete college")?;

    tracing::info!("Deleted college {}", id);
    Ok(ApiResponse::success(json!({ "message": "College deleted successfully" })))
}
