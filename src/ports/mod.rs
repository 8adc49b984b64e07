//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TodoRepository` - Storage of Todo aggregates keyed by `TodoId`

mod todo_repository;

pub use todo_repository::TodoRepository;
