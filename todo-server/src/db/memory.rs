//! In-memory todo store
//!
//! Same contract as the PostgreSQL repository: ids start at 1 and are never
//! reused, update overwrites both fields, delete returns the prior values.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreError, TodoStore};
use crate::models::{Todo, TodoId, TodoInput};

#[derive(Default)]
struct Inner {
    next_id: i32,
    todos: BTreeMap<i32, Todo>,
}

/// In-process substitute for the record store
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        let inner = self.inner.read().await;
        inner
            .todos
            .get(&id.get())
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, input: TodoInput) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;
        let todo = Todo::from_input(TodoId::new(inner.next_id), input);
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, input: TodoInput) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .get_mut(&id.get())
            .ok_or(StoreError::NotFound { id })?;
        todo.name = input.name;
        todo.description = input.description;
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .todos
            .remove(&id.get())
            .ok_or(StoreError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = MemoryStore::new();
        let a = store.create(TodoInput::new("a", "")).await.unwrap();
        let b = store.create(TodoInput::new("b", "")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = MemoryStore::new();
        let a = store.create(TodoInput::new("a", "")).await.unwrap();
        store.delete(TodoId::new(a.id)).await.unwrap();
        let b = store.create(TodoInput::new("b", "")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn create_past_max_id_is_an_error() {
        let store = MemoryStore::new();
        store.inner.write().await.next_id = i32::MAX;

        let result = store.create(TodoInput::new("overflow", "")).await;
        assert!(matches!(result, Err(StoreError::IdsExhausted)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_leaves_other_records_untouched() {
        let store = MemoryStore::new();
        let a = store.create(TodoInput::new("a", "1")).await.unwrap();
        let b = store.create(TodoInput::new("b", "2")).await.unwrap();

        store
            .update(TodoId::new(a.id), TodoInput::new("a2", "1b"))
            .await
            .unwrap();

        assert_eq!(store.get(TodoId::new(b.id)).await.unwrap(), b);
        let a2 = store.get(TodoId::new(a.id)).await.unwrap();
        assert_eq!((a2.name.as_str(), a2.description.as_str()), ("a2", "1b"));
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let store = MemoryStore::new();
        let id = TodoId::new(5);
        assert!(matches!(store.get(id).await, Err(StoreError::NotFound { .. })));
        assert!(matches!(
            store.update(id, TodoInput::new("x", "")).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(store.delete(id).await, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(TodoInput::new(format!("todo {i}"), ""))
                        .await
                        .expect("create failed")
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked"));
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert_eq!(store.list().await.unwrap().len(), 10);
    }
}
