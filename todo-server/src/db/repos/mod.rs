//! Repository implementations for database access

pub mod todos;

pub use todos::TodoRepo;
