use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::database::Database;

/// GET / - Liveness text
pub async fn root() -> &'static str {
    "server is running"
}

/// GET /health - Liveness plus a store ping
pub async fn health(Extension(db): Extension<Database>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok",
                "backend": db.backend_name()
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check store ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "backend": db.backend_name(),
                    "database_error": e.to_string()
                })),
            )
        }
    }
}
