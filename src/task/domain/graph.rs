//! Task graph aggregate and its runtime scheduling queries.

use super::{StatusUpdate, Task, TaskDomainError, TaskId, TaskStatus, execution_order};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The persisted task index: every task plus a derived execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGraph {
    tasks: Vec<Task>,
    execution_order: Vec<TaskId>,
}

/// Per-status task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProgress {
    /// Number of tasks in the graph.
    pub total: usize,
    /// Tasks in [`TaskStatus::Completed`].
    pub completed: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: usize,
    /// Tasks in [`TaskStatus::Rejected`].
    pub rejected: usize,
}

impl TaskGraph {
    /// Creates a graph from tasks, deriving the execution order.
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        let execution_order = execution_order(&tasks).into_order();
        Self {
            tasks,
            execution_order,
        }
    }

    /// Reconstructs a graph from persisted parts without recomputing order.
    #[must_use]
    pub const fn from_parts(tasks: Vec<Task>, execution_order: Vec<TaskId>) -> Self {
        Self {
            tasks,
            execution_order,
        }
    }

    /// Creates a graph with no tasks.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Returns all tasks in priority order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the derived execution order.
    #[must_use]
    pub fn execution_order(&self) -> &[TaskId] {
        &self.execution_order
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the graph has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the first pending task whose dependencies are all completed.
    ///
    /// `None` means either that nothing is pending or that every pending task
    /// is blocked; check [`Self::pending_tasks`] to tell the two apart.
    #[must_use]
    pub fn next_pending_task(&self) -> Option<&Task> {
        let completed: HashSet<&TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Completed)
            .map(Task::id)
            .collect();
        self.tasks.iter().find(|task| {
            task.status() == TaskStatus::Pending
                && task
                    .dependencies()
                    .iter()
                    .all(|dependency| completed.contains(dependency))
        })
    }

    /// Returns the task currently in progress, if any.
    #[must_use]
    pub fn in_progress_task(&self) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|task| task.status() == TaskStatus::InProgress)
    }

    /// Returns the most recently listed completed task.
    #[must_use]
    pub fn last_completed_task(&self) -> Option<&Task> {
        self.tasks
            .iter()
            .rev()
            .find(|task| task.status() == TaskStatus::Completed)
    }

    /// Returns the task a review applies to when none is named: the task in
    /// progress, else the most recently listed completed task.
    #[must_use]
    pub fn review_candidate(&self) -> Option<&Task> {
        self.in_progress_task()
            .or_else(|| self.last_completed_task())
    }

    /// Returns pending tasks in priority order.
    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Pending)
    }

    /// Returns pending tasks following the execution order.
    #[must_use]
    pub fn pending_in_execution_order(&self) -> Vec<&Task> {
        self.execution_order
            .iter()
            .filter_map(|id| self.find_task(id))
            .filter(|task| task.status() == TaskStatus::Pending)
            .collect()
    }

    /// Returns a copy of the graph with one task's status replaced.
    ///
    /// The single-in-progress convention is not enforced here; callers decide
    /// whether a transition is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] when `id` is not in the graph.
    pub fn with_task_status(
        &self,
        id: &TaskId,
        update: StatusUpdate,
    ) -> Result<Self, TaskDomainError> {
        let mut updated = self.clone();
        let task = updated
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskDomainError::TaskNotFound(id.clone()))?;
        task.apply(update);
        Ok(updated)
    }

    /// Returns per-status counts.
    #[must_use]
    pub fn progress(&self) -> TaskProgress {
        self.tasks
            .iter()
            .fold(TaskProgress::default(), |mut progress, task| {
                progress.total += 1;
                match task.status() {
                    TaskStatus::Pending => progress.pending += 1,
                    TaskStatus::InProgress => progress.in_progress += 1,
                    TaskStatus::Completed => progress.completed += 1,
                    TaskStatus::Rejected => progress.rejected += 1,
                }
                progress
            })
    }
}
