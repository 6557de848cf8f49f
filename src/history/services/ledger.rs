//! Append-only ledger with threshold-triggered compaction.

use crate::history::{
    domain::{CompactionReport, HistoryAction, HistoryEntry, HistoryLog, LedgerSettings},
    ports::{HistoryRepository, HistoryRepositoryError},
};
use crate::task::domain::TaskId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for ledger operations.
#[derive(Debug, Error)]
pub enum HistoryLedgerError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] HistoryRepositoryError),
}

/// Result type for ledger operations.
pub type HistoryLedgerResult<T> = Result<T, HistoryLedgerError>;

/// Records task transitions and keeps the live log bounded.
#[derive(Clone)]
pub struct HistoryLedger<R, C>
where
    R: HistoryRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    settings: LedgerSettings,
}

impl<R, C> HistoryLedger<R, C>
where
    R: HistoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a ledger with default settings.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            settings: LedgerSettings::default(),
        }
    }

    /// Replaces the ledger settings.
    #[must_use]
    pub const fn with_settings(mut self, settings: LedgerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &LedgerSettings {
        &self.settings
    }

    /// Appends an entry stamped with the current time.
    ///
    /// When the live log then exceeds both the auto-compaction threshold and
    /// the configured number of recent entries it is compacted before being
    /// persisted; otherwise it is saved whole.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryLedgerError::Repository`] when the log cannot be read
    /// or written.
    pub async fn append(
        &self,
        task_id: &TaskId,
        action: HistoryAction,
        note: Option<String>,
    ) -> HistoryLedgerResult<HistoryEntry> {
        let mut log = self.repository.load_live().await?;
        let entry = HistoryEntry::new(task_id.clone(), action, self.clock.utc(), note);
        log.push(entry.clone());

        let keep_recent = self.settings.keep_recent();
        if log.len() > self.settings.auto_compact_threshold() && log.len() > keep_recent {
            self.compact_log(log, keep_recent).await?;
        } else {
            self.repository.save_live(&log).await?;
        }
        Ok(entry)
    }

    /// Moves all but the `keep_recent` newest entries into today's archive.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryLedgerError::Repository`] when the log or archive
    /// cannot be read or written.
    pub async fn compact(&self, keep_recent: usize) -> HistoryLedgerResult<CompactionReport> {
        let log = self.repository.load_live().await?;
        self.compact_log(log, keep_recent).await
    }

    /// Returns the live log.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryLedgerError::Repository`] when the log cannot be read.
    pub async fn history(&self) -> HistoryLedgerResult<HistoryLog> {
        Ok(self.repository.load_live().await?)
    }

    async fn compact_log(
        &self,
        mut log: HistoryLog,
        keep_recent: usize,
    ) -> HistoryLedgerResult<CompactionReport> {
        let older = log.split_off_older(keep_recent);
        if older.is_empty() {
            return Ok(CompactionReport {
                archived: 0,
                remaining: log.len(),
            });
        }

        let date = self.clock.utc().date_naive();
        let mut archive = self.repository.load_archive(date).await?;
        let archived = older.len();
        archive.extend(older);
        self.repository.save_archive(date, &archive).await?;
        self.repository.save_live(&log).await?;

        info!(archived, remaining = log.len(), %date, "history compacted");
        Ok(CompactionReport {
            archived,
            remaining: log.len(),
        })
    }
}
