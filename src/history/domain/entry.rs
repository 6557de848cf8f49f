//! Ledger entries.

use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of task transition recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    /// A task moved to in progress.
    Started,
    /// A task was completed or approved.
    Completed,
    /// A task was rejected in review.
    Rejected,
    /// Work on the in-progress task resumed.
    Resumed,
}

impl HistoryAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::Resumed => "resumed",
        }
    }
}

/// Error returned when an action name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown history action: {0}")]
pub struct ParseHistoryActionError(pub String);

impl TryFrom<&str> for HistoryAction {
    type Error = ParseHistoryActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "started" => Ok(Self::Started),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            "resumed" => Ok(Self::Resumed),
            _ => Err(ParseHistoryActionError(value.to_owned())),
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable ledger record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    task_id: TaskId,
    action: HistoryAction,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl HistoryEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        action: HistoryAction,
        timestamp: DateTime<Utc>,
        note: Option<String>,
    ) -> Self {
        Self {
            task_id,
            action,
            timestamp,
            note,
        }
    }

    /// Returns the task the entry refers to.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the recorded action.
    #[must_use]
    pub const fn action(&self) -> HistoryAction {
        self.action
    }

    /// Returns when the entry was appended.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the optional free-text note.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
