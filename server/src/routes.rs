//! HTTP handlers and router for the todo API.
//!
//! Handlers stay thin: validate the id and body with [`ValidPath`] and
//! [`ValidJson`], take the store lock for exactly one store operation, then
//! map the outcome to a status code. A missing id becomes
//! [`ServerError::NotFound`].

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use crate::error::ServerError;
use crate::extract::{ValidJson, ValidPath};
use crate::store::{SharedStore, TodoId, TodoItem};

/// Body of `POST /todos/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Body of `PUT /todos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub text: String,
}

/// Build the full router around an existing store.
///
/// Browsers may call the API cross-origin only from `allowed_origins`.
pub fn router(store: SharedStore, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/todos", get(list_todos))
        .route("/todos/add", post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(store)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Todo API is running" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<TodoItem>> {
    let store = store.read().await;
    Json(store.list().to_vec())
}

async fn create_todo(
    State(store): State<SharedStore>,
    ValidJson(input): ValidJson<CreateTodo>,
) -> (StatusCode, Json<TodoItem>) {
    let todo = store.write().await.create(input.text);
    debug!(id = todo.id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(store): State<SharedStore>,
    ValidPath(id): ValidPath<TodoId>,
    ValidJson(input): ValidJson<UpdateTodo>,
) -> Result<Json<TodoItem>, ServerError> {
    match store.write().await.update(id, input.text) {
        Some(todo) => {
            debug!(id, "todo updated");
            Ok(Json(todo))
        }
        None => {
            debug!(id, "update of unknown todo");
            Err(ServerError::NotFound)
        }
    }
}

async fn delete_todo(
    State(store): State<SharedStore>,
    ValidPath(id): ValidPath<TodoId>,
) -> Result<StatusCode, ServerError> {
    if store.write().await.delete(id) {
        debug!(id, "todo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        debug!(id, "delete of unknown todo");
        Err(ServerError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_todo_rejects_missing_text() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"title":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_requires_text() {
        let result: Result<UpdateTodo, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_accepts_empty_text() {
        let input: CreateTodo = serde_json::from_str(r#"{"text":""}"#).unwrap();
        assert_eq!(input.text, "");
    }
}
