//! In-memory todo storage.
//!
//! # Design
//! `TodoStore` is the only owner of the item list and the id counter. It is a
//! plain synchronous struct with no interior locking; the server wraps it in
//! a single `RwLock` (see [`SharedStore`]) so every operation runs to
//! completion before the next mutation starts.
//!
//! Ids are handed out from a counter that only ever moves forward, so an id
//! freed by `delete` is never issued again.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Identifier assigned to a todo on creation.
pub type TodoId = i64;

/// The store shared between request handlers.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// A single todo item as stored and returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
}

/// Insertion-ordered todo list with a monotonic id generator.
#[derive(Debug)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    next_id: TodoId,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Wrap a fresh store for use as router state.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// All items in creation order.
    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item with the next id. Text is taken as-is.
    pub fn create(&mut self, text: String) -> TodoItem {
        let item = TodoItem {
            id: self.next_id,
            text,
        };
        self.items.push(item.clone());
        // Overflow would need i64::MAX creates; an in-memory list cannot get there.
        self.next_id += 1;
        item
    }

    /// Replace the text of the first item with `id`, keeping its position.
    ///
    /// Returns `None` and leaves the list untouched when no item matches.
    pub fn update(&mut self, id: TodoId, text: String) -> Option<TodoItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.text = text;
        Some(item.clone())
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
