use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;

/// `Json<T>` whose rejections come back in the API error format.
///
/// Oversized bodies keep their 413; every other rejection (bad syntax,
/// wrong shape, missing content type) is a 400 `INVALID_JSON`.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(ApiError::payload_too_large(rejection.body_text()))
            }
            Err(rejection) => Err(ApiError::invalid_json(rejection.body_text())),
        }
    }
}
