//! Ordered collections of ledger entries.

use super::{HistoryAction, HistoryEntry};
use crate::task::domain::TaskId;
use serde::{Deserialize, Serialize};

/// The shape shared by the live log and its dated archives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    #[serde(default)]
    entries: Vec<HistoryEntry>,
}

/// Total and per-action entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of entries.
    pub total: usize,
    /// Entries with [`HistoryAction::Started`].
    pub started: usize,
    /// Entries with [`HistoryAction::Completed`].
    pub completed: usize,
    /// Entries with [`HistoryAction::Rejected`].
    pub rejected: usize,
    /// Entries with [`HistoryAction::Resumed`].
    pub resumed: usize,
}

/// Outcome of a compaction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactionReport {
    /// Entries moved into the archive.
    pub archived: usize,
    /// Entries left in the live log.
    pub remaining: usize,
}

impl HistoryLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a log from existing entries, oldest first.
    #[must_use]
    pub const fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Appends every entry of `older`, keeping their order.
    pub fn extend(&mut self, older: Vec<HistoryEntry>) {
        self.entries.extend(older);
    }

    /// Removes and returns all but the `keep_recent` newest entries.
    ///
    /// Returns an empty list when the log holds `keep_recent` entries or
    /// fewer.
    pub fn split_off_older(&mut self, keep_recent: usize) -> Vec<HistoryEntry> {
        let Some(cut) = self.entries.len().checked_sub(keep_recent) else {
            return Vec::new();
        };
        let recent = self.entries.split_off(cut);
        std::mem::replace(&mut self.entries, recent)
    }

    /// Counts entries by action.
    #[must_use]
    pub fn summarize(&self) -> HistorySummary {
        self.entries.iter().fold(
            HistorySummary {
                total: self.entries.len(),
                ..HistorySummary::default()
            },
            |mut summary, entry| {
                match entry.action() {
                    HistoryAction::Started => summary.started += 1,
                    HistoryAction::Completed => summary.completed += 1,
                    HistoryAction::Rejected => summary.rejected += 1,
                    HistoryAction::Resumed => summary.resumed += 1,
                }
                summary
            },
        )
    }

    /// Returns the entries recorded for `task_id`, oldest first.
    #[must_use]
    pub fn entries_for_task(&self, task_id: &TaskId) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.task_id() == task_id)
            .collect()
    }
}
