//! Repository port for the live history log and its dated archives.

use crate::history::domain::HistoryLog;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for history persistence operations.
pub type HistoryRepositoryResult<T> = Result<T, HistoryRepositoryError>;

/// Live log and archive persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Loads the live log; a log that was never written is empty.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Schema`] when the stored log is
    /// malformed.
    async fn load_live(&self) -> HistoryRepositoryResult<HistoryLog>;

    /// Replaces the live log.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Persistence`] when the write fails.
    async fn save_live(&self, log: &HistoryLog) -> HistoryRepositoryResult<()>;

    /// Loads the archive for `date`; a missing archive is empty.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Schema`] when the archive is
    /// malformed.
    async fn load_archive(&self, date: NaiveDate) -> HistoryRepositoryResult<HistoryLog>;

    /// Replaces the archive for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Persistence`] when the write fails.
    async fn save_archive(&self, date: NaiveDate, log: &HistoryLog)
    -> HistoryRepositoryResult<()>;
}

/// Errors returned by history persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum HistoryRepositoryError {
    /// A stored log file failed validation.
    #[error("history log is malformed: {0}")]
    Schema(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl HistoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
