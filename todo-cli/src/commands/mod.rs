//! Command implementations for the todos CLI

pub mod serve;

pub use serve::run_serve;
