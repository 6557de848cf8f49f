//! In-memory log file store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::history::{
    domain::ReviewRecord,
    ports::{HistoryRepositoryError, HistoryRepositoryResult, LogFileStore},
};
use crate::project::domain::layout;

#[derive(Debug, Default)]
struct InMemoryLogState {
    reviews: Vec<(String, ReviewRecord)>,
    files: BTreeMap<String, DateTime<Utc>>,
    archived: Vec<String>,
}

/// Thread-safe in-memory log file store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogFileStore {
    state: Arc<RwLock<InMemoryLogState>>,
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> HistoryRepositoryError {
    HistoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryLogFileStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a loose log file last modified at `modified`.
    #[must_use]
    pub fn with_file(self, name: impl Into<String>, modified: DateTime<Utc>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.files.insert(name.into(), modified);
        }
        self
    }

    /// Returns review records written so far with their paths.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Persistence`] if the lock is
    /// poisoned.
    pub fn reviews(&self) -> HistoryRepositoryResult<Vec<(String, ReviewRecord)>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.reviews.clone())
    }

    /// Returns the names of files moved into the archive.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Persistence`] if the lock is
    /// poisoned.
    pub fn archived(&self) -> HistoryRepositoryResult<Vec<String>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.archived.clone())
    }
}

#[async_trait]
impl LogFileStore for InMemoryLogFileStore {
    async fn write_review_record(&self, record: &ReviewRecord) -> HistoryRepositoryResult<String> {
        let path = layout::review_record_file(
            record.task_id.as_str(),
            record.timestamp.timestamp_millis(),
        );
        let mut state = self.state.write().map_err(poisoned)?;
        state.reviews.push((path.clone(), record.clone()));
        Ok(path)
    }

    async fn archive_files_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> HistoryRepositoryResult<Vec<String>> {
        let mut state = self.state.write().map_err(poisoned)?;
        let expired: Vec<String> = state
            .files
            .iter()
            .filter(|(name, modified)| {
                name.as_str() != layout::HISTORY_FILE_NAME && **modified < cutoff
            })
            .map(|(name, _)| name.clone())
            .collect();
        for name in &expired {
            state.files.remove(name);
        }
        state.archived.extend(expired.iter().cloned());
        Ok(expired)
    }
}
