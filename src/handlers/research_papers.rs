use axum::extract::Extension;
use serde_json::Value;

use crate::api::format::documents_to_api_values;
use crate::database::{Database, Repository};
use crate::error::StoreResultExt;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::RESEARCH_PAPERS;

/// GET /research-papers - Every paper, unfiltered. The collection is
/// maintained outside this API.
pub async fn get(Extension(db): Extension<Database>) -> ApiResult<Vec<Value>> {
    let documents = Repository::new(RESEARCH_PAPERS, db)
        .select_all()
        .await
        .or_server_error("Server error")?;

    Ok(ApiResponse::success(documents_to_api_values(documents)))
}
