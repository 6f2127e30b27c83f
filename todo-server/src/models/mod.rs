//! Domain models
//!
//! Path input is validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod todo;
pub mod validation;

pub use todo::{Todo, TodoId, TodoInput};
pub use validation::ValidationError;
