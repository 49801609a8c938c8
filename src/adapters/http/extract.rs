//! Request body extraction with the API's error envelope.
//!
//! Browser and gateway clients do not always send `Content-Type:
//! application/json`, and an absent body must reach the handler so it can
//! report the missing fields itself. `JsonBody` therefore ignores the content
//! type, treats an empty body as `T::default()`, and turns malformed JSON or
//! wrongly typed fields into a 400 `ReminderApiError`.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::adapters::http::error::ReminderApiError;
use crate::domain::reminder::ReminderError;

/// JSON request body, decoded regardless of content type.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T>
where
    T: DeserializeOwned + Default,
{
    /// Decodes raw body bytes; whitespace-only bodies are empty requests.
    pub fn decode(body: &[u8]) -> Result<T, ReminderError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            ReminderError::validation("body", "Invalid request body")
        })
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ReminderApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ReminderError::validation("body", e.body_text()))?;

        Ok(JsonBody(Self::decode(&body)?))
    }
}
