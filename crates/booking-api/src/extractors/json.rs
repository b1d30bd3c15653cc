//! JSON body extractor whose rejections use the API error body.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use booking_core::error::AppError;

use crate::error::ApiError;

/// Works like `axum::Json<T>`, but every parse failure becomes a
/// `400 VALIDATION_ERROR` instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| JsonBody(value))
            .map_err(|rejection: JsonRejection| {
                ApiError::from(AppError::validation(format!(
                    "Invalid request body: {}",
                    rejection.body_text()
                )))
            })
    }
}
