//! In-Memory Todo Repository Adapter
//!
//! Stores todos in a process-local map. Nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Priority, TodoId};
use crate::domain::todo::Todo;
use crate::ports::TodoRepository;

/// In-memory storage for todos.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<HashMap<TodoId, Todo>>>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored todos.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.todos.write().await.clear();
    }

    async fn collect_where<F>(&self, predicate: F) -> Vec<Todo>
    where
        F: Fn(&Todo) -> bool + Send,
    {
        let todos = self.todos.read().await;
        let mut matching: Vec<Todo> = todos.values().filter(|t| predicate(t)).cloned().collect();
        matching.sort_by(|a, b| {
            a.created_at()
                .cmp(b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        matching
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn save(&self, todo: &Todo) -> Result<(), DomainError> {
        self.todos.write().await.insert(todo.id().clone(), todo.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        Ok(self.todos.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, DomainError> {
        Ok(self.collect_where(|_| true).await)
    }

    async fn find_by_priority(&self, priority: Priority) -> Result<Vec<Todo>, DomainError> {
        Ok(self.collect_where(|t| t.priority() == priority).await)
    }

    async fn find_completed(&self) -> Result<Vec<Todo>, DomainError> {
        Ok(self.collect_where(|t| t.is_completed()).await)
    }

    async fn find_pending(&self) -> Result<Vec<Todo>, DomainError> {
        Ok(self.collect_where(|t| !t.is_completed()).await)
    }

    async fn delete(&self, id: &TodoId) -> Result<(), DomainError> {
        self.todos.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn todo(title: &str) -> Todo {
        Todo::create(title, None).unwrap()
    }

    #[tokio::test]
    async fn save_and_find_by_id() {
        let repo = InMemoryTodoRepository::new();
        let todo = todo("Task");

        repo.save(&todo).await.unwrap();

        let found = repo.find_by_id(todo.id()).await.unwrap();
        assert_eq!(found, Some(todo));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown() {
        let repo = InMemoryTodoRepository::new();
        let found = repo.find_by_id(&TodoId::generate()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn save_replaces_existing_entry() {
        let repo = InMemoryTodoRepository::new();
        let mut todo = todo("Task");
        repo.save(&todo).await.unwrap();

        todo.update_title("Renamed").unwrap();
        repo.save(&todo).await.unwrap();

        assert_eq!(repo.len().await, 1);
        let found = repo.find_by_id(todo.id()).await.unwrap().unwrap();
        assert_eq!(found.title(), "Renamed");
    }

    #[tokio::test]
    async fn stored_copy_is_isolated_from_caller() {
        let repo = InMemoryTodoRepository::new();
        let mut todo = todo("Task");
        repo.save(&todo).await.unwrap();

        todo.complete().unwrap();

        let found = repo.find_by_id(todo.id()).await.unwrap().unwrap();
        assert!(!found.is_completed());
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_creation() {
        let repo = InMemoryTodoRepository::new();
        let first = todo("First");
        sleep(Duration::from_millis(2));
        let second = todo("Second");
        sleep(Duration::from_millis(2));
        let third = todo("Third");

        repo.save(&third).await.unwrap();
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|t| t.title().to_string())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn filters_by_priority_and_completion() {
        let repo = InMemoryTodoRepository::new();
        let mut high = todo("High");
        high.change_priority(Priority::High).unwrap();
        let mut done = todo("Done");
        done.complete().unwrap();
        let pending = todo("Pending");

        for t in [&high, &done, &pending] {
            repo.save(t).await.unwrap();
        }

        let by_priority = repo.find_by_priority(Priority::High).await.unwrap();
        assert_eq!(by_priority, vec![high.clone()]);

        let completed = repo.find_completed().await.unwrap();
        assert_eq!(completed, vec![done]);

        let pending_ids: Vec<TodoId> = repo
            .find_pending()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id().clone())
            .collect();
        assert_eq!(pending_ids.len(), 2);
        assert!(pending_ids.contains(high.id()));
        assert!(pending_ids.contains(pending.id()));
    }

    #[tokio::test]
    async fn delete_removes_and_tolerates_unknown_id() {
        let repo = InMemoryTodoRepository::new();
        let todo = todo("Task");
        repo.save(&todo).await.unwrap();

        repo.delete(todo.id()).await.unwrap();
        repo.delete(todo.id()).await.unwrap();

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryTodoRepository::new();
        let other = repo.clone();
        other.save(&todo("Task")).await.unwrap();

        assert_eq!(repo.len().await, 1);
        repo.clear().await;
        assert!(other.is_empty().await);
    }
}
