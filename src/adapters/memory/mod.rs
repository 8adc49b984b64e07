//! In-memory adapters.

mod todo_repository;

pub use todo_repository::InMemoryTodoRepository;
