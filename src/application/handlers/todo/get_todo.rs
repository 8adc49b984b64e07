//! GetTodoHandler - Query handler for retrieving a single todo.

use std::sync::Arc;

use tracing::debug;

use super::load_todo;
use crate::domain::foundation::TodoId;
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Query to get a todo by ID.
#[derive(Debug, Clone)]
pub struct GetTodoQuery {
    pub todo_id: TodoId,
}

/// Handler for retrieving todos.
pub struct GetTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl GetTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetTodoQuery) -> Result<Todo, TodoError> {
        debug!(todo_id = %query.todo_id, "Fetching todo");
        load_todo(self.repository.as_ref(), &query.todo_id).await
    }
}
