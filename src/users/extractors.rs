use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use tracing::warn;

use super::dto::UserPayload;
use crate::error::ApiError;

/// JSON body with both `username` and `email` present, string-typed and non-empty.
pub struct ValidUser(pub UserPayload);

#[async_trait]
impl<S> FromRequest<S> for ValidUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<UserPayload>::from_request(req, state)
            .await
            .map_err(|e| {
                warn!(error = %e.body_text(), "payload rejected");
                ApiError::Validation
            })?;

        if payload.username.is_empty() || payload.email.is_empty() {
            warn!("payload has empty username or email");
            return Err(ApiError::Validation);
        }

        Ok(ValidUser(payload))
    }
}
