//! Port contracts for task graph persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{TaskGraphRepository, TaskGraphRepositoryError, TaskGraphRepositoryResult};
