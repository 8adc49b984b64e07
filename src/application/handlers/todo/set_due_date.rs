//! SetDueDateHandler - Command handler for scheduling todos.

use std::sync::Arc;

use tracing::info;

use super::load_todo;
use crate::domain::foundation::{Timestamp, TodoId};
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Command to set a todo's due date.
#[derive(Debug, Clone)]
pub struct SetDueDateCommand {
    pub todo_id: TodoId,
    pub due_date: Timestamp,
}

/// Handler for setting due dates.
pub struct SetDueDateHandler {
    repository: Arc<dyn TodoRepository>,
}

impl SetDueDateHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetDueDateCommand) -> Result<Todo, TodoError> {
        let mut todo = load_todo(self.repository.as_ref(), &cmd.todo_id).await?;

        todo.set_due_date(cmd.due_date)?;

        self.repository.save(&todo).await?;

        info!(
            todo_id = %todo.id(),
            due_date = %cmd.due_date.as_datetime(),
            "Todo due date set"
        );
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTodoRepository;

    async fn setup() -> (Arc<InMemoryTodoRepository>, SetDueDateHandler, Todo) {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let todo = Todo::create("File taxes", None).unwrap();
        repo.save(&todo).await.unwrap();
        let handler = SetDueDateHandler::new(repo.clone());
        (repo, handler, todo)
    }

    #[tokio::test]
    async fn sets_future_due_date() {
        let (repo, handler, todo) = setup().await;
        let due = Timestamp::now().plus_days(7).unwrap();

        handler
            .handle(SetDueDateCommand {
                todo_id: todo.id().clone(),
                due_date: due,
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(todo.id()).await.unwrap().unwrap();
        assert_eq!(stored.due_date(), Some(&due));
    }

    #[tokio::test]
    async fn rejects_past_due_date() {
        let (repo, handler, todo) = setup().await;

        let result = handler
            .handle(SetDueDateCommand {
                todo_id: todo.id().clone(),
                due_date: Timestamp::now().minus_days(1).unwrap(),
            })
            .await;

        assert_eq!(result, Err(TodoError::PastDueDate));
        let stored = repo.find_by_id(todo.id()).await.unwrap().unwrap();
        assert!(stored.due_date().is_none());
    }
}
