use axum::extract::Extension;
use mongodb::bson::DateTime;
use serde_json::{json, Map, Value};

use crate::api::format::bson_to_api_value;
use crate::database::{Database, Repository};
use crate::error::StoreResultExt;
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::models::{Admission, ADMISSIONS};

/// POST /admissions - Submit an admission form
pub async fn post(
    Extension(db): Extension<Database>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> ApiResult<Value> {
    let admission = Admission::from_payload(payload, DateTime::now())?;
    let selected_college = admission.selected_college().cloned().unwrap_or(Value::Null);

    let inserted_id = Repository::new(ADMISSIONS, db)
        .insert(admission.into_document()?)
        .await
        .or_server_error("Server error")?;

    tracing::info!("Admission {} submitted for {}", inserted_id, selected_college);
    Ok(ApiResponse::created(json!({
        "message": "Admission submitted successfully",
        "id": bson_to_api_value(inserted_id)
    })))
}
