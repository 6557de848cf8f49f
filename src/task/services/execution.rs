//! Service layer for building, scheduling, and transitioning tasks.

use super::review::{ReviewOutcome, ReviewRequest};
use crate::history::{
    domain::{HistoryAction, LedgerSettings, ReviewRecord, ReviewVerdict},
    ports::{HistoryRepository, HistoryRepositoryError, LogFileStore},
    services::{HistoryLedger, HistoryLedgerError},
};
use crate::task::{
    domain::{
        StatusUpdate, Task, TaskDomainError, TaskGraph, TaskGraphBuilder, TaskId, TaskProgress,
        TaskSplitInput, TaskStatus,
    },
    ports::{TaskGraphRepository, TaskGraphRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task index persistence failed.
    #[error(transparent)]
    Repository(#[from] TaskGraphRepositoryError),
    /// Recording history failed.
    #[error(transparent)]
    History(#[from] HistoryLedgerError),
    /// Writing a log file failed.
    #[error(transparent)]
    LogStore(#[from] HistoryRepositoryError),
    /// Nothing is left to run.
    #[error("all tasks are completed")]
    AllTasksCompleted,
    /// Pending tasks exist but none has all dependencies completed.
    #[error("no pending task is runnable; dependency cycle or unfinished prerequisites: {}", format_ids(.pending))]
    DependencyDeadlock {
        /// Pending tasks that could not be started.
        pending: Vec<TaskId>,
    },
    /// No task qualifies for review.
    #[error("no task to review; only in-progress or completed tasks can be reviewed")]
    InvalidReviewTarget,
}

fn format_ids(ids: &[TaskId]) -> String {
    ids.iter()
        .map(TaskId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl TaskServiceError {
    /// Whether the error is an expected workflow rejection rather than an
    /// infrastructure failure.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::Domain(_)
                | Self::Repository(TaskGraphRepositoryError::NotFound)
                | Self::AllTasksCompleted
                | Self::DependencyDeadlock { .. }
                | Self::InvalidReviewTarget
        )
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task graph orchestration service.
pub struct TaskService<T, H, L, C>
where
    T: TaskGraphRepository,
    H: HistoryRepository,
    L: LogFileStore,
    C: Clock + Send + Sync,
{
    repository: Arc<T>,
    ledger: HistoryLedger<H, C>,
    logs: Arc<L>,
    clock: Arc<C>,
    builder: TaskGraphBuilder,
}

impl<T, H, L, C> TaskService<T, H, L, C>
where
    T: TaskGraphRepository,
    H: HistoryRepository,
    L: LogFileStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default builder and ledger settings.
    #[must_use]
    pub fn new(repository: Arc<T>, history: Arc<H>, logs: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            repository,
            ledger: HistoryLedger::new(history, Arc::clone(&clock)),
            logs,
            clock,
            builder: TaskGraphBuilder::new(),
        }
    }

    /// Replaces the graph builder.
    #[must_use]
    pub fn with_builder(mut self, builder: TaskGraphBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Replaces the ledger settings.
    #[must_use]
    pub fn with_ledger_settings(mut self, settings: LedgerSettings) -> Self {
        self.ledger = self.ledger.with_settings(settings);
        self
    }

    /// Returns the history ledger transitions are recorded in.
    #[must_use]
    pub const fn ledger(&self) -> &HistoryLedger<H, C> {
        &self.ledger
    }

    /// Builds a graph from planning documents without persisting it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the document has more
    /// sections than priorities can number.
    pub fn build_graph(&self, requirements: &str, spec: &str) -> TaskServiceResult<TaskGraph> {
        let input = TaskSplitInput { requirements, spec };
        Ok(self.builder.build(input, self.clock.utc())?)
    }

    /// Persists `graph`, replacing any existing task index.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the write fails.
    pub async fn store_graph(&self, graph: &TaskGraph) -> TaskServiceResult<()> {
        self.repository.save(graph).await?;
        info!(tasks = graph.len(), "task index stored");
        Ok(())
    }

    /// Loads the persisted graph.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the index is missing or
    /// malformed.
    pub async fn load_graph(&self) -> TaskServiceResult<TaskGraph> {
        Ok(self.repository.load().await?)
    }

    /// Marks the next runnable task in progress and records `started`.
    ///
    /// History is written before the index, so a failed append leaves the
    /// task pending.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::AllTasksCompleted`] when nothing is
    /// pending and [`TaskServiceError::DependencyDeadlock`] when pending
    /// tasks exist but none is runnable.
    pub async fn start_next_task(&self) -> TaskServiceResult<Task> {
        let graph = self.repository.load().await?;
        let Some(next) = graph.next_pending_task() else {
            let pending: Vec<TaskId> = graph.pending_tasks().map(|t| t.id().clone()).collect();
            if pending.is_empty() {
                return Err(TaskServiceError::AllTasksCompleted);
            }
            return Err(TaskServiceError::DependencyDeadlock { pending });
        };

        let id = next.id().clone();
        let updated = graph.with_task_status(&id, StatusUpdate::to(TaskStatus::InProgress))?;
        self.ledger
            .append(&id, HistoryAction::Started, None)
            .await?;
        self.repository.save(&updated).await?;

        info!(task_id = %id, "task started");
        Ok(find_updated(&updated, &id)?)
    }

    /// Returns the task in progress, recording `resumed`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the index cannot be read or history
    /// cannot be written.
    pub async fn resume_current_task(&self) -> TaskServiceResult<Option<Task>> {
        let graph = self.repository.load().await?;
        let Some(task) = graph.in_progress_task().cloned() else {
            return Ok(None);
        };
        self.ledger
            .append(task.id(), HistoryAction::Resumed, None)
            .await?;
        info!(task_id = %task.id(), "task resumed");
        Ok(Some(task))
    }

    /// Completes the task in progress, stamping `completedAt` and recording
    /// `completed`.
    ///
    /// Returns `Ok(None)` when no task is in progress.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when persistence fails.
    pub async fn complete_current_task(&self) -> TaskServiceResult<Option<Task>> {
        let graph = self.repository.load().await?;
        let Some(id) = graph.in_progress_task().map(|task| task.id().clone()) else {
            return Ok(None);
        };

        let update = StatusUpdate::to(TaskStatus::Completed).with_completed_at(self.clock.utc());
        let updated = graph.with_task_status(&id, update)?;
        self.repository.save(&updated).await?;
        self.ledger
            .append(&id, HistoryAction::Completed, None)
            .await?;

        info!(task_id = %id, "task completed");
        Ok(Some(find_updated(&updated, &id)?))
    }

    /// Returns the task `start_next_task` would start, without mutating.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the index cannot be read.
    pub async fn preview_next_task(&self) -> TaskServiceResult<Option<Task>> {
        let graph = self.repository.load().await?;
        Ok(graph.next_pending_task().cloned())
    }

    /// Returns every pending task in execution order, without mutating.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the index cannot be read.
    pub async fn preview_pending(&self) -> TaskServiceResult<Vec<Task>> {
        let graph = self.repository.load().await?;
        Ok(graph
            .pending_in_execution_order()
            .into_iter()
            .cloned()
            .collect())
    }

    /// Returns the task currently in progress.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the index cannot be read.
    pub async fn in_progress_task(&self) -> TaskServiceResult<Option<Task>> {
        let graph = self.repository.load().await?;
        Ok(graph.in_progress_task().cloned())
    }

    /// Returns per-status task counts.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the index cannot be read.
    pub async fn progress(&self) -> TaskServiceResult<TaskProgress> {
        Ok(self.repository.load().await?.progress())
    }

    /// Applies a review verdict to a task.
    ///
    /// Without a verdict the resolved task is returned unchanged. Approving
    /// completes the task; rejecting marks it rejected with the comment
    /// recorded as the history note. Either verdict writes a review record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the named task does not
    /// exist and [`TaskServiceError::InvalidReviewTarget`] when no task
    /// qualifies by default.
    pub async fn review_task(&self, request: ReviewRequest) -> TaskServiceResult<ReviewOutcome> {
        let graph = self.repository.load().await?;
        let target = match request.target() {
            Some(id) => graph
                .find_task(id)
                .ok_or_else(|| TaskDomainError::TaskNotFound(id.clone()))?,
            None => graph
                .review_candidate()
                .ok_or(TaskServiceError::InvalidReviewTarget)?,
        };
        let id = target.id().clone();

        let (requested_verdict, requested_comment, reviewer) = request.into_parts();
        let Some(verdict) = requested_verdict else {
            return Ok(ReviewOutcome::AwaitingVerdict(target.clone()));
        };

        let now = self.clock.utc();
        let comment =
            requested_comment.unwrap_or_else(|| verdict.default_comment().to_owned());
        let record = ReviewRecord {
            task_id: id.clone(),
            status: verdict,
            reviewer,
            comment: comment.clone(),
            timestamp: now,
        };
        let path = self.logs.write_review_record(&record).await?;

        let (update, action, note) = match verdict {
            ReviewVerdict::Approved => (
                StatusUpdate::to(TaskStatus::Completed).with_completed_at(now),
                HistoryAction::Completed,
                None,
            ),
            ReviewVerdict::Rejected => (
                StatusUpdate::to(TaskStatus::Rejected),
                HistoryAction::Rejected,
                Some(comment),
            ),
        };
        let updated = graph.with_task_status(&id, update)?;
        self.repository.save(&updated).await?;
        self.ledger.append(&id, action, note).await?;

        info!(task_id = %id, %verdict, "task reviewed");
        Ok(ReviewOutcome::Recorded {
            task: find_updated(&updated, &id)?,
            record,
            path,
        })
    }
}

fn find_updated(graph: &TaskGraph, id: &TaskId) -> Result<Task, TaskDomainError> {
    graph
        .find_task(id)
        .cloned()
        .ok_or_else(|| TaskDomainError::TaskNotFound(id.clone()))
}
