//! Validated query-string extraction

use crate::html::escape;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

/// Rejection for malformed or out-of-range query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorError {
    /// Status returned to the client
    pub status: StatusCode,
    /// Human-readable reason
    pub message: String,
}

impl ExtractorError {
    /// 400 with `message`
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ExtractorError {
    fn into_response(self) -> Response {
        let body = format!(
            "<!DOCTYPE html><html><body><h2>Bad Request</h2><p>{}</p><a href=\"/dashboard\">Return to Dashboard</a></body></html>",
            escape(&self.message)
        );
        (self.status, Html(body)).into_response()
    }
}

/// Query parameters deserialized with serde and checked with `validator`
#[derive(Debug, Clone, Default)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ExtractorError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|e| ExtractorError::bad_request(format!("Invalid query parameters: {e}")))?;

        if let Err(errors) = value.validate() {
            debug!("Rejected query {:?}: {}", parts.uri.query(), errors);
            return Err(ExtractorError::bad_request(format!("Invalid query parameters: {errors}")));
        }

        Ok(Self(value))
    }
}
