//! Todo-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, TodoId};

/// Todo-specific errors surfaced by the application handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Todo was not found.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),
    /// Title is blank or too long.
    #[error("Invalid title: {0}")]
    InvalidTitle(String),
    /// Unrecognized priority level.
    #[error("{0}")]
    InvalidPriority(String),
    /// Edit or completion attempted on a completed todo.
    #[error("Todo is already completed")]
    AlreadyCompleted,
    /// Reopen attempted on an active todo.
    #[error("Todo is not completed")]
    NotCompleted,
    /// Due date was not in the future.
    #[error("Due date cannot be in the past")]
    PastDueDate,
    /// Validation failed for some other field.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl TodoError {
    pub fn not_found(id: TodoId) -> Self {
        TodoError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TodoError::NotFound(_) => ErrorCode::TodoNotFound,
            TodoError::InvalidTitle(_) => ErrorCode::InvalidTitle,
            TodoError::InvalidPriority(_) => ErrorCode::InvalidPriority,
            TodoError::AlreadyCompleted => ErrorCode::AlreadyCompleted,
            TodoError::NotCompleted => ErrorCode::NotCompleted,
            TodoError::PastDueDate => ErrorCode::PastDueDate,
            TodoError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TodoError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for TodoError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidTitle => TodoError::InvalidTitle(err.message),
            ErrorCode::InvalidPriority => TodoError::InvalidPriority(err.message),
            ErrorCode::AlreadyCompleted => TodoError::AlreadyCompleted,
            ErrorCode::NotCompleted => TodoError::NotCompleted,
            ErrorCode::PastDueDate => TodoError::PastDueDate,
            ErrorCode::ValidationFailed => TodoError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => TodoError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_codes_map_to_variants() {
        let cases = [
            (ErrorCode::InvalidTitle, ErrorCode::InvalidTitle),
            (ErrorCode::InvalidPriority, ErrorCode::InvalidPriority),
            (ErrorCode::AlreadyCompleted, ErrorCode::AlreadyCompleted),
            (ErrorCode::NotCompleted, ErrorCode::NotCompleted),
            (ErrorCode::PastDueDate, ErrorCode::PastDueDate),
            (ErrorCode::ValidationFailed, ErrorCode::ValidationFailed),
            (ErrorCode::DatabaseError, ErrorCode::DatabaseError),
        ];
        for (domain_code, expected) in cases {
            let err: TodoError = DomainError::new(domain_code, "boom").into();
            assert_eq!(err.code(), expected, "mapping {:?}", domain_code);
        }
    }

    #[test]
    fn validation_keeps_field_detail() {
        let err: TodoError = DomainError::validation("todo_id", "empty").into();
        assert_eq!(
            err,
            TodoError::ValidationFailed {
                field: "todo_id".to_string(),
                message: "empty".to_string(),
            }
        );
    }

    #[test]
    fn not_found_message_includes_id() {
        let id = TodoId::new("todo_1").unwrap();
        assert_eq!(TodoError::not_found(id).to_string(), "Todo not found: todo_1");
    }
}
