//! Port for loose log files kept beside the live history log.

use super::HistoryRepositoryResult;
use crate::history::domain::ReviewRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Access to review records and the log retention sweep.
#[async_trait]
pub trait LogFileStore: Send + Sync {
    /// Writes `record` and returns the path it was stored under.
    ///
    /// # Errors
    ///
    /// Returns [`super::HistoryRepositoryError::Persistence`] when the write
    /// fails.
    async fn write_review_record(&self, record: &ReviewRecord) -> HistoryRepositoryResult<String>;

    /// Moves log files last modified before `cutoff` into the log archive.
    ///
    /// The live history log and the archive directory itself are never
    /// moved. Returns the names of the moved files.
    ///
    /// # Errors
    ///
    /// Returns [`super::HistoryRepositoryError::Persistence`] when listing or
    /// moving fails.
    async fn archive_files_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> HistoryRepositoryResult<Vec<String>>;
}
