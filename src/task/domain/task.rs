//! Task record and lifecycle status types.

use super::{ParseTaskStatusError, Priority, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is waiting to be scheduled.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished or approved in review.
    Completed,
    /// Task was rejected in review.
    Rejected,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status change applied through [`super::TaskGraph::with_task_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    status: TaskStatus,
    completed_at: Option<DateTime<Utc>>,
}

impl StatusUpdate {
    /// Creates an update that only replaces the status.
    #[must_use]
    pub const fn to(status: TaskStatus) -> Self {
        Self {
            status,
            completed_at: None,
        }
    }

    /// Also stamps the completion time.
    #[must_use]
    pub fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Returns the target status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the completion time to stamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

/// A discrete unit of work derived from one requirements section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
    dependencies: Vec<TaskId>,
    priority: Priority,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted dependency identifiers.
    pub dependencies: Vec<TaskId>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a pending task with no dependencies.
    #[must_use]
    pub fn pending(
        id: TaskId,
        title: impl Into<String>,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::Pending,
            dependencies: Vec::new(),
            priority,
            created_at,
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            status: data.status,
            dependencies: data.dependencies,
            priority: data.priority,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the identifiers this task depends on, in discovery order.
    #[must_use]
    pub fn dependencies(&self) -> &[TaskId] {
        &self.dependencies
    }

    /// Returns the scheduling priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if the task was completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub(crate) fn set_dependencies(&mut self, dependencies: Vec<TaskId>) {
        self.dependencies = dependencies;
    }

    pub(crate) fn apply(&mut self, update: StatusUpdate) {
        self.status = update.status;
        if let Some(completed_at) = update.completed_at {
            self.completed_at = Some(completed_at);
        }
    }
}
