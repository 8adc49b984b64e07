//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the todo domain.

mod errors;
mod ids;
mod priority;
mod state_machine;
mod timestamp;
mod todo_status;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::TodoId;
pub use priority::Priority;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use todo_status::TodoStatus;
