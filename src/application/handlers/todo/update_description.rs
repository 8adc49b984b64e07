//! UpdateDescriptionHandler - Command handler for editing todo descriptions.

use std::sync::Arc;

use tracing::info;

use super::load_todo;
use crate::domain::foundation::TodoId;
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Command to replace a todo's description.
#[derive(Debug, Clone)]
pub struct UpdateDescriptionCommand {
    pub todo_id: TodoId,
    pub description: String,
}

/// Handler for editing descriptions.
pub struct UpdateDescriptionHandler {
    repository: Arc<dyn TodoRepository>,
}

impl UpdateDescriptionHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateDescriptionCommand) -> Result<Todo, TodoError> {
        let mut todo = load_todo(self.repository.as_ref(), &cmd.todo_id).await?;

        todo.update_description(cmd.description)?;

        self.repository.save(&todo).await?;

        info!(todo_id = %todo.id(), "Todo description updated");
        Ok(todo)
    }
}
