//! CreateTodoHandler - Command handler for creating new todos.

use std::sync::Arc;

use tracing::info;

use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Command to create a new todo.
#[derive(Debug, Clone)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: Option<String>,
}

/// Handler for creating todos.
pub struct CreateTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl CreateTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateTodoCommand) -> Result<Todo, TodoError> {
        let todo = Todo::create(cmd.title, cmd.description)?;

        self.repository.save(&todo).await?;

        info!(todo_id = %todo.id(), title = todo.title(), "Todo created");
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTodoRepository;
    use crate::domain::foundation::{DomainError, ErrorCode, Priority, TodoId};
    use async_trait::async_trait;

    struct FailingTodoRepository;

    #[async_trait]
    impl TodoRepository for FailingTodoRepository {
        async fn save(&self, _todo: &Todo) -> Result<(), DomainError> {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated save failure",
            ))
        }

        async fn find_by_id(&self, _id: &TodoId) -> Result<Option<Todo>, DomainError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<Todo>, DomainError> {
            Ok(vec![])
        }

        async fn find_by_priority(&self, _priority: Priority) -> Result<Vec<Todo>, DomainError> {
            Ok(vec![])
        }

        async fn find_completed(&self) -> Result<Vec<Todo>, DomainError> {
            Ok(vec![])
        }

        async fn find_pending(&self) -> Result<Vec<Todo>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: &TodoId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn command(title: &str) -> CreateTodoCommand {
        CreateTodoCommand {
            title: title.to_string(),
            description: Some("Learn Domain Driven Design".to_string()),
        }
    }

    #[tokio::test]
    async fn creates_and_persists_todo() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let handler = CreateTodoHandler::new(repo.clone());

        let todo = handler.handle(command("Learn DDD")).await.unwrap();

        assert_eq!(todo.title(), "Learn DDD");
        assert_eq!(todo.description(), "Learn Domain Driven Design");
        assert_eq!(todo.priority(), Priority::Medium);
        let stored = repo.find_by_id(todo.id()).await.unwrap();
        assert_eq!(stored, Some(todo));
    }

    #[tokio::test]
    async fn rejects_blank_title_without_saving() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let handler = CreateTodoHandler::new(repo.clone());

        let result = handler.handle(command("   ")).await;

        assert!(matches!(result, Err(TodoError::InvalidTitle(_))));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn surfaces_storage_failure() {
        let handler = CreateTodoHandler::new(Arc::new(FailingTodoRepository));

        let result = handler.handle(command("Learn DDD")).await;

        assert!(matches!(result, Err(TodoError::Infrastructure(_))));
    }
}
