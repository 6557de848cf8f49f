//! Review request and outcome types.

use crate::history::domain::{ReviewRecord, ReviewVerdict};
use crate::task::domain::{Task, TaskId};

/// Reviewer name recorded when none is supplied.
pub const DEFAULT_REVIEWER: &str = "user";

/// Parameters for reviewing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    target: Option<TaskId>,
    verdict: Option<ReviewVerdict>,
    comment: Option<String>,
    reviewer: String,
}

impl Default for ReviewRequest {
    fn default() -> Self {
        Self {
            target: None,
            verdict: None,
            comment: None,
            reviewer: DEFAULT_REVIEWER.to_owned(),
        }
    }
}

impl ReviewRequest {
    /// Creates a request that reviews the default candidate without a
    /// verdict.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reviews `task_id` instead of the default candidate.
    #[must_use]
    pub fn for_task(mut self, task_id: TaskId) -> Self {
        self.target = Some(task_id);
        self
    }

    /// Records `verdict`.
    #[must_use]
    pub const fn with_verdict(mut self, verdict: ReviewVerdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    /// Attaches a reviewer comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the reviewer name.
    #[must_use]
    pub fn with_reviewer(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewer = reviewer.into();
        self
    }

    /// Returns the explicit target, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&TaskId> {
        self.target.as_ref()
    }

    /// Returns the verdict, if any.
    #[must_use]
    pub const fn verdict(&self) -> Option<ReviewVerdict> {
        self.verdict
    }

    pub(super) fn into_parts(self) -> (Option<ReviewVerdict>, Option<String>, String) {
        (self.verdict, self.comment, self.reviewer)
    }
}

/// Result of a review request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// No verdict was given; the task that would be reviewed.
    AwaitingVerdict(Task),
    /// The verdict was applied and recorded.
    Recorded {
        /// Task after the verdict was applied.
        task: Task,
        /// Persisted review record.
        record: ReviewRecord,
        /// Path the record was written to.
        path: String,
    },
}
