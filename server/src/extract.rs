//! Request validation.
//!
//! `ValidJson<T>` and `ValidPath<T>` wrap axum's body and path extractors so
//! that every rejection (bad syntax, wrong field types, missing fields, a
//! non-JSON content type, an unparsable id) is turned into
//! [`ServerError::MalformedInput`] before a handler runs.
//!
//! A body without a `Content-Type` header is still parsed as JSON.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ServerError;

/// A JSON request body that has been parsed into `T`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !json_or_missing_content_type(req.headers()) {
            return Err(malformed(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| malformed(rejection.body_text()))?;
        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| malformed(err.to_string()))
    }
}

/// A path parameter that has been parsed into `T`.
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed(rejection.body_text())),
        }
    }
}

fn malformed(reason: String) -> ServerError {
    warn!(%reason, "rejected request");
    ServerError::MalformedInput(reason)
}

/// `application/json`, any `+json` subtype, or no header at all.
fn json_or_missing_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
