//! In-memory live log and archives.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::history::{
    domain::HistoryLog,
    ports::{HistoryRepository, HistoryRepositoryError, HistoryRepositoryResult},
};

#[derive(Debug, Default)]
struct InMemoryHistoryState {
    live: HistoryLog,
    archives: BTreeMap<NaiveDate, HistoryLog>,
}

/// Thread-safe in-memory history repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryRepository {
    state: Arc<RwLock<InMemoryHistoryState>>,
}

impl InMemoryHistoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dates that currently have an archive.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryRepositoryError::Persistence`] if the lock is
    /// poisoned.
    pub fn archive_dates(&self) -> HistoryRepositoryResult<Vec<NaiveDate>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.archives.keys().copied().collect())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> HistoryRepositoryError {
    HistoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn load_live(&self) -> HistoryRepositoryResult<HistoryLog> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.live.clone())
    }

    async fn save_live(&self, log: &HistoryLog) -> HistoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.live = log.clone();
        Ok(())
    }

    async fn load_archive(&self, date: NaiveDate) -> HistoryRepositoryResult<HistoryLog> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.archives.get(&date).cloned().unwrap_or_default())
    }

    async fn save_archive(
        &self,
        date: NaiveDate,
        log: &HistoryLog,
    ) -> HistoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.archives.insert(date, log.clone());
        Ok(())
    }
}
