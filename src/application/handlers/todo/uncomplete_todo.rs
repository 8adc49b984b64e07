//! UncompleteTodoHandler - Command handler for reopening completed todos.

use std::sync::Arc;

use tracing::info;

use super::load_todo;
use crate::domain::foundation::TodoId;
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Command to reopen a completed todo.
#[derive(Debug, Clone)]
pub struct UncompleteTodoCommand {
    pub todo_id: TodoId,
}

/// Handler for reopening todos.
pub struct UncompleteTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl UncompleteTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UncompleteTodoCommand) -> Result<Todo, TodoError> {
        let mut todo = load_todo(self.repository.as_ref(), &cmd.todo_id).await?;

        todo.uncomplete()?;

        self.repository.save(&todo).await?;

        info!(todo_id = %todo.id(), "Todo reopened");
        Ok(todo)
    }
}
