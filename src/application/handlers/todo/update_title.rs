//! UpdateTitleHandler - Command handler for retitling todos.

use std::sync::Arc;

use tracing::info;

use super::load_todo;
use crate::domain::foundation::TodoId;
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Command to change a todo's title.
#[derive(Debug, Clone)]
pub struct UpdateTitleCommand {
    pub todo_id: TodoId,
    pub title: String,
}

/// Handler for retitling todos.
pub struct UpdateTitleHandler {
    repository: Arc<dyn TodoRepository>,
}

impl UpdateTitleHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateTitleCommand) -> Result<Todo, TodoError> {
        let mut todo = load_todo(self.repository.as_ref(), &cmd.todo_id).await?;

        todo.update_title(cmd.title)?;

        self.repository.save(&todo).await?;

        info!(todo_id = %todo.id(), title = todo.title(), "Todo retitled");
        Ok(todo)
    }
}
