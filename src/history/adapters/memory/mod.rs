//! In-memory history adapters for service tests.

mod history;
mod log_store;

pub use history::InMemoryHistoryRepository;
pub use log_store::InMemoryLogFileStore;
