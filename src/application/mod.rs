//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    ChangePriorityCommand, ChangePriorityHandler, CompleteTodoCommand, CompleteTodoHandler,
    CreateTodoCommand, CreateTodoHandler, DeleteTodoCommand, DeleteTodoHandler, GetTodoHandler,
    GetTodoQuery, ListTodosHandler, ListTodosQuery, SetDueDateCommand, SetDueDateHandler,
    TodoFilter, UncompleteTodoCommand, UncompleteTodoHandler, UpdateDescriptionCommand,
    UpdateDescriptionHandler, UpdateTitleCommand, UpdateTitleHandler,
};
