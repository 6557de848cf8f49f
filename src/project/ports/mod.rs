//! Port contracts for project context access.

pub mod store;

pub use store::{ProjectStore, ProjectStoreError, ProjectStoreResult};
