//! Todo domain module.
//!
//! The `Todo` aggregate root and its error taxonomy. Todos move between
//! `Active` and `Completed`; completion freezes title, description and
//! priority until the todo is reopened.

mod aggregate;
mod errors;

pub use aggregate::{Todo, MAX_TITLE_LENGTH};
pub use errors::TodoError;
