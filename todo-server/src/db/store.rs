//! Store trait for todo persistence
//!
//! Provides a seam between handlers and the record store, with:
//! - PostgreSQL implementation (`TodoRepo`)
//! - In-memory implementation for tests and local runs (`MemoryStore`)

use async_trait::async_trait;

use crate::models::{Todo, TodoId, TodoInput};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: todo '{id}'")]
    NotFound { id: TodoId },

    #[error("todo ids exhausted")]
    IdsExhausted,
}

/// Todo persistence. Each call is one auto-committed statement.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, unordered.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    async fn get(&self, id: TodoId) -> Result<Todo, StoreError>;

    /// Insert a todo; the store assigns the id.
    async fn create(&self, input: TodoInput) -> Result<Todo, StoreError>;

    /// Overwrite both mutable fields of an existing todo.
    async fn update(&self, id: TodoId, input: TodoInput) -> Result<Todo, StoreError>;

    /// Remove a todo, returning its prior values.
    async fn delete(&self, id: TodoId) -> Result<Todo, StoreError>;
}
