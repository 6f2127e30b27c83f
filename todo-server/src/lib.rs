//! todo-server: CRUD HTTP service for a single todo resource
//!
//! Routes map one-to-one onto single SQL statements against a
//! PostgreSQL `todos` table. Every response is JSON.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, StoreError, TodoRepo, TodoStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{Todo, TodoId, TodoInput};
