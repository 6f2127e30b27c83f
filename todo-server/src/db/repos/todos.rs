//! Todo repository
//!
//! One parameterized statement per operation:
//! - create/update/delete use RETURNING (no read-back query)
//! - zero affected rows maps to StoreError::NotFound

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{StoreError, TodoStore};
use crate::models::{Todo, TodoId, TodoInput};

/// PostgreSQL-backed todo repository
#[derive(Clone)]
pub struct TodoRepo {
    pool: PgPool,
}

impl TodoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for TodoRepo {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos: Vec<Todo> = sqlx::query_as(
            r#"
            SELECT id, name, description
            FROM todos
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    async fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        sqlx::query_as(
            r#"
            SELECT id, name, description
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, input: TodoInput) -> Result<Todo, StoreError> {
        let todo: Todo = sqlx::query_as(
            r#"
            INSERT INTO todos (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn update(&self, id: TodoId, input: TodoInput) -> Result<Todo, StoreError> {
        sqlx::query_as(
            r#"
            UPDATE todos
            SET name = $1, description = $2
            WHERE id = $3
            RETURNING id, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: TodoId) -> Result<Todo, StoreError> {
        sqlx::query_as(
            r#"
            DELETE FROM todos
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }
}
