//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `todo` - Todo aggregate and lifecycle rules

pub mod foundation;
pub mod todo;
