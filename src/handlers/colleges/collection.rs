use axum::extract::{Extension, Path};
use serde_json::{json, Map, Value};

use crate::api::format::{bson_to_api_value, documents_to_api_values};
use crate::database::{Database, Repository};
use crate::error::StoreResultExt;
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::models::{College, COLLEGES};

/// POST /colleges - Create a college
pub async fn post(
    Extension(db): Extension<Database>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> ApiResult<Value> {
    let college = College::from_payload(payload)?;
    let name = college.name().unwrap_or_default().to_string();

    let inserted_id = Repository::new(COLLEGES, db)
        .insert(college.into_document()?)
        .await
        .or_server_error("Failed to add college")?;

    tracing::info!("Created college {:?} ({})", name, inserted_id);
    Ok(ApiResponse::created(json!({
        "message": "College added successfully",
        "collegeId": bson_to_api_value(inserted_id)
    })))
}

/// GET /colleges - List all colleges in store order
pub async fn get(Extension(db): Extension<Database>) -> ApiResult<Vec<Value>> {
    let documents = Repository::new(COLLEGES, db)
        .select_all()
        .await
        .or_server_error("Failed to fetch colleges")?;

    Ok(ApiResponse::success(documents_to_api_values(documents)))
}

/// GET /colleges/search/:name - Case-insensitive substring match on name
pub async fn search(
    Path(name): Path<String>,
    Extension(db): Extension<Database>,
) -> ApiResult<Vec<Value>> {
    let documents = Repository::new(COLLEGES, db)
        .select_containing("name", &name)
        .await
        .or_server_error("Failed to search colleges")?;

    Ok(ApiResponse::success(documents_to_api_values(documents)))
}
