//! Todo repository port.
//!
//! Defines the contract for persisting and retrieving Todo aggregates.
//! Implementations handle the actual storage.
//!
//! # Design
//!
//! - **Upsert semantics**: `save` inserts or replaces by id
//! - **Deterministic listings**: sequences are ordered by `created_at`
//!   ascending, ties broken by id

use crate::domain::foundation::{DomainError, Priority, TodoId};
use crate::domain::todo::Todo;
use async_trait::async_trait;

/// Repository port for Todo aggregate persistence.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert or replace a todo, keyed by its id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, todo: &Todo) -> Result<(), DomainError>;

    /// Find a todo by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, DomainError>;

    /// Every stored todo.
    async fn find_all(&self) -> Result<Vec<Todo>, DomainError>;

    /// Todos with exactly the given priority.
    async fn find_by_priority(&self, priority: Priority) -> Result<Vec<Todo>, DomainError>;

    /// Todos that are completed.
    async fn find_completed(&self) -> Result<Vec<Todo>, DomainError>;

    /// Todos that are still active.
    async fn find_pending(&self) -> Result<Vec<Todo>, DomainError>;

    /// Remove a todo. Removing an unknown id is a no-op.
    async fn delete(&self, id: &TodoId) -> Result<(), DomainError>;
}
