//! Flags accepted by command handlers.

use crate::history::domain::ReviewVerdict;
use crate::task::domain::TaskId;

/// Options for `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Continue the task already in progress instead of starting one.
    pub resume: bool,
    /// Show what would run without changing anything.
    pub dry_run: bool,
    /// With `dry_run`, list every pending task in execution order.
    pub all: bool,
}

/// Options for `review`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewOptions {
    /// Verdict to apply; `None` only shows the review target.
    pub verdict: Option<ReviewVerdict>,
    /// Reviewer comment.
    pub comment: Option<String>,
    /// Task to review instead of the default candidate.
    pub task: Option<TaskId>,
}

/// Options for `compact`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactOptions {
    /// Number of recent history entries to keep live.
    pub keep: Option<usize>,
    /// Age in days after which loose log files are archived.
    pub days: Option<u32>,
}
