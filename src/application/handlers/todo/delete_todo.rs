//! DeleteTodoHandler - Command handler for removing todos.

use std::sync::Arc;

use tracing::info;

use super::load_todo;
use crate::domain::foundation::TodoId;
use crate::domain::todo::TodoError;
use crate::ports::TodoRepository;

/// Command to delete a todo.
#[derive(Debug, Clone)]
pub struct DeleteTodoCommand {
    pub todo_id: TodoId,
}

/// Handler for deleting todos.
///
/// Unlike the repository's `delete`, an unknown id is an error here.
pub struct DeleteTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl DeleteTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteTodoCommand) -> Result<(), TodoError> {
        let todo = load_todo(self.repository.as_ref(), &cmd.todo_id).await?;

        self.repository.delete(todo.id()).await?;

        info!(todo_id = %todo.id(), "Todo deleted");
        Ok(())
    }
}
