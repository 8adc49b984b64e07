//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod todo;

pub use todo::{
    ChangePriorityCommand, ChangePriorityHandler, CompleteTodoCommand, CompleteTodoHandler,
    CreateTodoCommand, CreateTodoHandler, DeleteTodoCommand, DeleteTodoHandler, GetTodoHandler,
    GetTodoQuery, ListTodosHandler, ListTodosQuery, SetDueDateCommand, SetDueDateHandler,
    TodoFilter, UncompleteTodoCommand, UncompleteTodoHandler, UpdateDescriptionCommand,
    UpdateDescriptionHandler, UpdateTitleCommand, UpdateTitleHandler,
};
