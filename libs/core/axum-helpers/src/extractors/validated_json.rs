//! JSON extractor with validation via the `validator` crate.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the body as JSON and runs [`Validate::validate`] on it.
///
/// The body is decoded regardless of `Content-Type`. Rejections are 400s:
/// an unreadable or malformed body gives `Invalid request body`, and a
/// failed validation gives `Validation error: <details>`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateCategory {
///     #[validate(length(min = 1))]
///     code: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateCategory>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let invalid_body = || AppError::BadRequest("Invalid request body".to_string()).into_response();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| invalid_body())?;
        let data: T = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            invalid_body()
        })?;

        data.validate().map_err(|e| {
            AppError::BadRequest(format!("Validation error: {}", e)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
