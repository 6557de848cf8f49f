//! File-backed history adapters under the project's `logs/` directory.

mod history;
mod log_store;

pub use history::FsHistoryRepository;
pub use log_store::FsLogFileStore;

use crate::history::ports::HistoryRepositoryError;
use crate::storage::StorageError;

impl From<StorageError> for HistoryRepositoryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Schema { path, message } => Self::Schema(format!("{path}: {message}")),
            other => Self::persistence(other),
        }
    }
}
