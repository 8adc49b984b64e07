//! Todo command and query handlers.
//!
//! Every command handler follows the same sequence: load the todo by id,
//! apply one aggregate operation, save it back.

mod change_priority;
mod complete_todo;
mod create_todo;
mod delete_todo;
mod get_todo;
mod list_todos;
mod set_due_date;
mod uncomplete_todo;
mod update_description;
mod update_title;

pub use change_priority::{ChangePriorityCommand, ChangePriorityHandler};
pub use complete_todo::{CompleteTodoCommand, CompleteTodoHandler};
pub use create_todo::{CreateTodoCommand, CreateTodoHandler};
pub use delete_todo::{DeleteTodoCommand, DeleteTodoHandler};
pub use get_todo::{GetTodoHandler, GetTodoQuery};
pub use list_todos::{ListTodosHandler, ListTodosQuery, TodoFilter};
pub use set_due_date::{SetDueDateCommand, SetDueDateHandler};
pub use uncomplete_todo::{UncompleteTodoCommand, UncompleteTodoHandler};
pub use update_description::{UpdateDescriptionCommand, UpdateDescriptionHandler};
pub use update_title::{UpdateTitleCommand, UpdateTitleHandler};

use crate::domain::foundation::TodoId;
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Loads a todo or fails with `NotFound`.
async fn load_todo(repository: &dyn TodoRepository, id: &TodoId) -> Result<Todo, TodoError> {
    match repository.find_by_id(id).await? {
        Some(todo) => Ok(todo),
        None => {
            tracing::warn!(todo_id = %id, "Todo not found");
            Err(TodoError::not_found(id.clone()))
        }
    }
}
