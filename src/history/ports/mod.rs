//! Port contracts for history persistence.

pub mod log_store;
pub mod repository;

pub use log_store::LogFileStore;
pub use repository::{HistoryRepository, HistoryRepositoryError, HistoryRepositoryResult};
