//! Typed results of command handlers.

use crate::history::domain::{CompactionReport, HistorySummary};
use crate::task::domain::{Task, TaskGraph, TaskProgress};
use crate::workflow::domain::Phase;

/// Result of `task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    /// The stored task graph.
    pub graph: TaskGraph,
    /// Phase recorded after the command.
    pub phase: Phase,
}

/// Result of `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A task was started.
    Started(Task),
    /// The task in progress was resumed.
    Resumed(Task),
    /// `--resume` was given but nothing is in progress.
    NothingToResume,
    /// Dry run: the task that would start next, if any.
    NextPreview(Option<Task>),
    /// Dry run with `--all`: every pending task in execution order.
    PendingPreview(Vec<Task>),
    /// Every task is completed.
    AllCompleted,
}

/// Result of `done`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoneOutcome {
    /// The task in progress was completed.
    Completed {
        /// The completed task.
        task: Task,
        /// Pending tasks left afterwards.
        remaining: usize,
    },
    /// No task was in progress.
    NoTaskInProgress,
}

/// Result of `compact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactOutcome {
    /// History compaction result.
    pub compaction: CompactionReport,
    /// Names of log files moved into the log archive.
    pub archived_logs: Vec<String>,
}

/// Result of `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Project name from the configuration.
    pub project_name: String,
    /// Recorded phase.
    pub phase: Phase,
    /// Task counts, when a task index exists.
    pub progress: Option<TaskProgress>,
    /// Tasks in priority order, empty when no task index exists.
    pub tasks: Vec<Task>,
    /// Live history counts.
    pub history: HistorySummary,
}
