//! Todo endpoints
//!
//! Create takes a JSON body, update takes a form-encoded body.
//! Every response, including errors, is JSON.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{FormBody, JsonBody, ValidTodoId};
use crate::http::server::AppState;
use crate::models::{Todo, TodoInput};

/// GET /todos/ - list all todos
async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// GET /todos/{id}/ - get a single todo
async fn get_todo(
    State(state): State<Arc<AppState>>,
    ValidTodoId(id): ValidTodoId,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.get(id).await?;
    Ok(Json(todo))
}

/// POST /todos/ - create a todo from a JSON body
async fn create_todo(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.create(input).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok(Json(todo))
}

/// PUT /todos/{id}/ - overwrite name and description from a form body
async fn update_todo(
    State(state): State<Arc<AppState>>,
    ValidTodoId(id): ValidTodoId,
    FormBody(input): FormBody<TodoInput>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.update(id, input).await?;
    tracing::info!(id = todo.id, "todo updated");
    Ok(Json(todo))
}

/// DELETE /todos/{id}/delete/ - delete a todo, returning what was removed
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    ValidTodoId(id): ValidTodoId,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store.delete(id).await?;
    tracing::info!(id = todo.id, "todo deleted");
    Ok(Json(todo))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos/{id}/", get(get_todo).put(update_todo))
        .route("/todos/{id}/delete/", delete(delete_todo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryStore, TodoStore};
    use crate::models::TodoId;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(MemoryStore::new())))
    }

    #[tokio::test]
    async fn list_is_empty_array_without_records() {
        let Json(todos) = list_todos(State(state())).await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_fields() {
        let state = state();
        let Json(todo) = create_todo(
            State(state.clone()),
            JsonBody(TodoInput::new("Buy milk", "2%")),
        )
        .await
        .unwrap();

        assert!(todo.id > 0);
        assert_eq!(todo.name, "Buy milk");
        assert_eq!(todo.description, "2%");
        assert_eq!(state.store.get(TodoId::new(todo.id)).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = get_todo(State(state()), ValidTodoId(TodoId::new(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let state = state();
        let created = state.store.create(TodoInput::new("a", "b")).await.unwrap();
        let id = TodoId::new(created.id);

        let Json(deleted) = delete_todo(State(state.clone()), ValidTodoId(id))
            .await
            .unwrap();

        assert_eq!(deleted, created);
        assert!(state.store.list().await.unwrap().is_empty());
    }
}
