//! CompleteTodoHandler - Command handler for completing todos.

use std::sync::Arc;

use tracing::info;

use super::load_todo;
use crate::domain::foundation::TodoId;
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Command to mark a todo as completed.
#[derive(Debug, Clone)]
pub struct CompleteTodoCommand {
    pub todo_id: TodoId,
}

/// Handler for completing todos.
pub struct CompleteTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl CompleteTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CompleteTodoCommand) -> Result<Todo, TodoError> {
        let mut todo = load_todo(self.repository.as_ref(), &cmd.todo_id).await?;

        todo.complete()?;

        self.repository.save(&todo).await?;

        info!(todo_id = %todo.id(), "Todo completed");
        Ok(todo)
    }
}
