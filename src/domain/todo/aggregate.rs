//! Todo aggregate root.
//!
//! A todo owns its title, description, priority, completion state and
//! optional due date. All changes go through the methods below; each one
//! either applies fully or leaves the aggregate untouched.

use crate::domain::foundation::{
    DomainError, ErrorCode, Priority, StateMachine, Timestamp, TodoId, TodoStatus,
};
use serde::{Deserialize, Serialize};

/// Maximum length for a todo title, in characters, not counting
/// surrounding whitespace.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Todo aggregate - a single unit of work.
///
/// # Invariants
///
/// - `title` is non-blank and at most 100 characters once trimmed
/// - `completed_at` is present iff the status is `Completed`
/// - Completed todos cannot have title, description or priority changed
/// - `due_date` was strictly in the future when it was set
/// - `updated_at` never moves backwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    description: String,
    priority: Priority,
    status: TodoStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
    completed_at: Option<Timestamp>,
    due_date: Option<Timestamp>,
}

impl Todo {
    /// Create a new active todo with a generated id and `Medium` priority.
    ///
    /// # Errors
    ///
    /// - `InvalidTitle` if title is blank or too long
    pub fn create(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        Self::validate_title(&title)?;

        let now = Timestamp::now();
        Ok(Self {
            id: TodoId::generate(),
            title,
            description: description.unwrap_or_default(),
            priority: Priority::default(),
            status: TodoStatus::Active,
            created_at: now,
            updated_at: now,
            completed_at: None,
            due_date: None,
        })
    }

    /// Reconstitute a todo from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TodoId,
        title: String,
        description: String,
        priority: Priority,
        status: TodoStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
        completed_at: Option<Timestamp>,
        due_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            priority,
            status,
            created_at,
            updated_at,
            completed_at,
            due_date,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns true once the todo has been completed (and not reopened).
    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn due_date(&self) -> Option<&Timestamp> {
        self.due_date.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Change the title.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the todo is completed
    /// - `InvalidTitle` if the new title is blank or too long
    pub fn update_title(&mut self, new_title: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        let new_title = new_title.into();
        Self::validate_title(&new_title)?;

        self.title = new_title;
        self.touch();
        Ok(())
    }

    /// Replace the description. Any string is accepted, including empty.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the todo is completed
    pub fn update_description(
        &mut self,
        new_description: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.ensure_mutable()?;

        self.description = new_description.into();
        self.touch();
        Ok(())
    }

    /// Change the priority.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the todo is completed
    pub fn change_priority(&mut self, new_priority: Priority) -> Result<(), DomainError> {
        self.ensure_mutable()?;

        self.priority = new_priority;
        self.touch();
        Ok(())
    }

    /// Mark the todo as completed.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the todo is already completed
    pub fn complete(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&TodoStatus::Completed) {
            return Err(DomainError::new(
                ErrorCode::AlreadyCompleted,
                "Todo is already completed",
            ));
        }

        let now = self.next_update_time();
        self.status = TodoStatus::Completed;
        self.completed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Reopen a completed todo.
    ///
    /// # Errors
    ///
    /// - `NotCompleted` if the todo is still active
    pub fn uncomplete(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&TodoStatus::Active) {
            return Err(DomainError::new(
                ErrorCode::NotCompleted,
                "Todo is not completed",
            ));
        }

        self.status = TodoStatus::Active;
        self.completed_at = None;
        self.touch();
        Ok(())
    }

    /// Set the due date. It must be strictly later than the current time.
    ///
    /// # Errors
    ///
    /// - `PastDueDate` if `due_date` is not in the future
    pub fn set_due_date(&mut self, due_date: Timestamp) -> Result<(), DomainError> {
        let now = Timestamp::now();
        if !due_date.is_after(&now) {
            return Err(DomainError::new(
                ErrorCode::PastDueDate,
                "Due date cannot be in the past",
            ));
        }

        self.due_date = Some(due_date);
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true if the todo is active and its due date has passed.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(&Timestamp::now())
    }

    /// Same as [`Todo::is_overdue`], evaluated at `now`.
    pub fn is_overdue_at(&self, now: &Timestamp) -> bool {
        match &self.due_date {
            Some(due) if !self.is_completed() => now.is_after(due),
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::AlreadyCompleted,
                "Cannot update completed todos",
            ))
        }
    }

    /// Current time, clamped so `updated_at` never goes backwards.
    fn next_update_time(&self) -> Timestamp {
        Timestamp::now().max(self.updated_at)
    }

    fn touch(&mut self) {
        self.updated_at = self.next_update_time();
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::new(
                ErrorCode::InvalidTitle,
                "Todo must have a title",
            ));
        }
        // Stored as given; only the trimmed text counts toward the limit.
        let length = title.trim().chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(DomainError::new(
                ErrorCode::InvalidTitle,
                format!("Title cannot exceed {} characters", MAX_TITLE_LENGTH),
            )
            .with_detail("length", length.to_string()));
        }
        Ok(())
    }
}
