//! State machine trait for status enums.
//!
//! Gives lifecycle statuses a single place to declare which transitions
//! are legal.

/// Trait for status enums that represent state machines.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;
}
