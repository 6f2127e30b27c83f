//! Todo record and request shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Todo record as stored and as returned over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Todo {
    /// Build a record from store-assigned id and decoded input.
    pub fn from_input(id: TodoId, input: TodoInput) -> Self {
        Self {
            id: id.get(),
            name: input.name,
            description: input.description,
        }
    }
}

/// Mutable fields of a todo.
///
/// Decoded from the JSON create body and from the form-encoded update body.
/// `name` must be present; `description` defaults to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl TodoInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Validated todo id taken from a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(i32);

impl TodoId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for TodoId {
    type Err = ValidationError;

    /// Parse a path segment as an integer id.
    ///
    /// # Example
    /// ```
    /// use todo_server::models::TodoId;
    ///
    /// assert_eq!("42".parse::<TodoId>().unwrap().get(), 42);
    /// assert!("abc".parse::<TodoId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        s.parse::<i32>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        })
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
