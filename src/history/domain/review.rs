//! Review verdicts and the records written for them.

use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of reviewing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewVerdict {
    /// The work is accepted.
    Approved,
    /// The work needs changes.
    Rejected,
}

impl ReviewVerdict {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Comment recorded when the reviewer gives none.
    #[must_use]
    pub const fn default_comment(self) -> &'static str {
        match self {
            Self::Approved => "approved in review",
            Self::Rejected => "rejected in review; changes required",
        }
    }
}

impl fmt::Display for ReviewVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted review decision, written to `logs/review-<id>-<millis>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Reviewed task.
    pub task_id: TaskId,
    /// Review decision.
    pub status: ReviewVerdict,
    /// Who reviewed the task.
    pub reviewer: String,
    /// Reviewer comment.
    pub comment: String,
    /// When the decision was made.
    pub timestamp: DateTime<Utc>,
}
