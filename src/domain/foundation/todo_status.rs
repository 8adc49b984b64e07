//! TodoStatus enum for tracking the lifecycle of a todo.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Active,
    Completed,
}

impl TodoStatus {
    /// Returns true if title, description and priority may be edited.
    pub fn is_mutable(&self) -> bool {
        matches!(self, TodoStatus::Active)
    }
}

impl StateMachine for TodoStatus {
    /// Valid transitions:
    /// - Active -> Completed
    /// - Completed -> Active (reopen)
    fn can_transition_to(&self, target: &Self) -> bool {
        use TodoStatus::*;
        matches!((self, target), (Active, Completed) | (Completed, Active))
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TodoStatus::Active => "Active",
            TodoStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(TodoStatus::default(), TodoStatus::Active);
    }

    #[test]
    fn only_active_is_mutable() {
        assert!(TodoStatus::Active.is_mutable());
        assert!(!TodoStatus::Completed.is_mutable());
    }

    #[test]
    fn active_and_completed_transition_both_ways() {
        assert!(TodoStatus::Active.can_transition_to(&TodoStatus::Completed));
        assert!(TodoStatus::Completed.can_transition_to(&TodoStatus::Active));
    }

    #[test]
    fn self_transitions_are_rejected() {
        assert!(!TodoStatus::Active.can_transition_to(&TodoStatus::Active));
        assert!(!TodoStatus::Completed.can_transition_to(&TodoStatus::Completed));
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&TodoStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
