//! File-level retention sweep over the logs directory.

use crate::history::ports::{HistoryRepositoryResult, LogFileStore};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Moves stale log files into the log archive.
#[derive(Clone)]
pub struct LogRetentionService<L, C>
where
    L: LogFileStore,
    C: Clock + Send + Sync,
{
    store: Arc<L>,
    clock: Arc<C>,
}

impl<L, C> LogRetentionService<L, C>
where
    L: LogFileStore,
    C: Clock + Send + Sync,
{
    /// Creates a retention service.
    #[must_use]
    pub const fn new(store: Arc<L>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Archives log files last modified more than `days` days ago.
    ///
    /// A window reaching past the earliest representable time moves nothing.
    ///
    /// Returns the names of the moved files.
    ///
    /// # Errors
    ///
    /// Returns [`crate::history::ports::HistoryRepositoryError`] when the
    /// sweep fails part-way; files moved before the failure stay moved.
    pub async fn sweep(&self, days: u32) -> HistoryRepositoryResult<Vec<String>> {
        let cutoff = TimeDelta::try_days(i64::from(days))
            .and_then(|window| self.clock.utc().checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let moved = self.store.archive_files_older_than(cutoff).await?;
        if !moved.is_empty() {
            info!(count = moved.len(), days, "archived stale log files");
        }
        Ok(moved)
    }
}
