//! Database layer - connection pool, store trait and its implementations

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::TodoRepo;
pub use store::{StoreError, TodoStore};
