//! ChangePriorityHandler - Command handler for reprioritizing todos.

use std::sync::Arc;

use tracing::info;

use super::load_todo;
use crate::domain::foundation::{Priority, TodoId};
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Command to change a todo's priority.
///
/// `priority` is a level name (`LOW`, `MEDIUM`, `HIGH`, `URGENT`).
#[derive(Debug, Clone)]
pub struct ChangePriorityCommand {
    pub todo_id: TodoId,
    pub priority: String,
}

/// Handler for reprioritizing todos.
pub struct ChangePriorityHandler {
    repository: Arc<dyn TodoRepository>,
}

impl ChangePriorityHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ChangePriorityCommand) -> Result<Todo, TodoError> {
        let priority: Priority = cmd.priority.parse()?;

        let mut todo = load_todo(self.repository.as_ref(), &cmd.todo_id).await?;

        todo.change_priority(priority)?;

        self.repository.save(&todo).await?;

        info!(todo_id = %todo.id(), %priority, "Todo priority changed");
        Ok(todo)
    }
}
