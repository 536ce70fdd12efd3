//! Error types for the todo server.
//!
//! `ServerError` is what handlers return; it renders as a JSON body of the
//! form `{"detail": "..."}` with the matching status code. `ConfigError`
//! only surfaces at startup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Outcomes a request can end in other than success.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No todo has the requested id.
    #[error("Todo not found")]
    NotFound,

    /// The request body did not match the expected shape.
    #[error("{0}")]
    MalformedInput(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::MalformedInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Invalid server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid allowed origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: axum::http::header::InvalidHeaderValue,
    },
}
