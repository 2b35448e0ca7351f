//! JSON body extractor with validation

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use spatial_core::Validate;

/// Deserializes a JSON body and runs its `Validate` checks.
///
/// Missing or mistyped fields, bodies that are not JSON, and a missing
/// `Content-Type: application/json` all become 400 responses.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                ApiError::BadRequest(rejection.body_text())
            })?;

        value.validate()?;

        Ok(Self(value))
    }
}
