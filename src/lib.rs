//! Todo DDD - Domain-Driven Design with a todo list
//!
//! This crate models a todo list as an aggregate root guarded by value
//! objects, stored behind a repository port and driven by application
//! handlers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
