//! In-memory todo list HTTP API.
//!
//! # Overview
//! A single [`TodoStore`] holds the list and the id counter. The axum router
//! in [`routes`] is the only caller of the store; it is handed the store
//! explicitly, so each test can build its own isolated instance.
//!
//! | Method | Path          | Success            |
//! |--------|---------------|--------------------|
//! | GET    | `/todos`      | 200, all items     |
//! | POST   | `/todos/add`  | 201, created item  |
//! | PUT    | `/todos/{id}` | 200, updated item  |
//! | DELETE | `/todos/{id}` | 204, empty body    |

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod store;

use axum::{http::HeaderValue, Router};
use tokio::net::TcpListener;
use tracing::info;

pub use config::ServerConfig;
pub use error::{ConfigError, ServerError};
pub use routes::{router, CreateTodo, UpdateTodo};
pub use store::{SharedStore, TodoId, TodoItem, TodoStore};

/// Router over a fresh, empty store with default configuration.
pub fn app() -> Router {
    app_with_store(TodoStore::shared())
}

/// Router over `store` with default configuration.
pub fn app_with_store(store: SharedStore) -> Router {
    let origins = config::DEFAULT_ORIGINS.map(HeaderValue::from_static).to_vec();
    router(store, origins)
}

/// Serve the API on `listener` until the process receives Ctrl-C.
pub async fn run(listener: TcpListener, config: &ServerConfig) -> anyhow::Result<()> {
    let app = router(TodoStore::shared(), config.cors_origins()?);
    info!(addr = %listener.local_addr()?, "todo server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("todo server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
