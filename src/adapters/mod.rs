//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Process-local storage implementations

pub mod memory;

pub use memory::InMemoryTodoRepository;
