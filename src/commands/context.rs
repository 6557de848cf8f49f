//! Command handlers sharing one set of adapters.

use super::{
    CommandError, CommandResult, CompactOptions, CompactOutcome, DoneOutcome, ReviewOptions,
    RunOptions, RunOutcome, StatusReport, TaskListApproval, TaskOutcome,
};
use crate::history::{
    domain::LedgerSettings,
    ports::{HistoryRepository, LogFileStore},
    services::LogRetentionService,
};
use crate::project::{domain::ProjectConfig, ports::ProjectStore};
use crate::task::{
    domain::TaskGraph,
    ports::{TaskGraphRepository, TaskGraphRepositoryError},
    services::{ReviewOutcome, ReviewRequest, TaskService, TaskServiceError},
};
use crate::workflow::domain::{Phase, assert_min_phase};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Entry point for every workflow command.
pub struct CommandContext<P, T, H, L, C>
where
    P: ProjectStore,
    T: TaskGraphRepository,
    H: HistoryRepository,
    L: LogFileStore,
    C: Clock + Send + Sync,
{
    project: Arc<P>,
    tasks: TaskService<T, H, L, C>,
    retention: LogRetentionService<L, C>,
    settings: LedgerSettings,
}

impl<P, T, H, L, C> CommandContext<P, T, H, L, C>
where
    P: ProjectStore,
    T: TaskGraphRepository,
    H: HistoryRepository,
    L: LogFileStore,
    C: Clock + Send + Sync,
{
    /// Wires the command handlers to their adapters.
    #[must_use]
    pub fn new(
        project: Arc<P>,
        tasks: Arc<T>,
        history: Arc<H>,
        logs: Arc<L>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            project,
            tasks: TaskService::new(tasks, history, Arc::clone(&logs), Arc::clone(&clock)),
            retention: LogRetentionService::new(logs, clock),
            settings: LedgerSettings::default(),
        }
    }

    /// Replaces the ledger settings used for auto-compaction and defaults.
    #[must_use]
    pub fn with_ledger_settings(mut self, settings: LedgerSettings) -> Self {
        self.tasks = self.tasks.with_ledger_settings(settings);
        self.settings = settings;
        self
    }

    /// Returns the underlying task service.
    #[must_use]
    pub const fn task_service(&self) -> &TaskService<T, H, L, C> {
        &self.tasks
    }

    /// Splits the requirements into tasks and stores them once approved.
    ///
    /// Requires phase `spec`; advances the project to `task`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ApprovalDenied`] when `approval` rejects the
    /// list, [`CommandError::Phase`] before the spec phase, and
    /// [`CommandError::Project`] when planning documents are missing.
    pub async fn task<A>(&self, approval: &A) -> CommandResult<TaskOutcome>
    where
        A: TaskListApproval + ?Sized,
    {
        let mut config = self.gated_config(Phase::Spec).await?;
        let requirements = self.project.read_requirements().await?;
        let spec = self.project.read_spec().await?;

        let graph = self.tasks.build_graph(&requirements, &spec)?;
        if !approval.approve(&graph) {
            return Err(CommandError::ApprovalDenied);
        }
        self.tasks.store_graph(&graph).await?;
        let phase = self.advance(&mut config, Phase::Task).await?;
        Ok(TaskOutcome { graph, phase })
    }

    /// Starts, resumes, or previews the next task.
    ///
    /// Requires phase `task`; starting a task advances the project to `run`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::TaskAlreadyInProgress`] when starting while a
    /// task is active and [`CommandError::Task`] with
    /// [`TaskServiceError::DependencyDeadlock`] when pending tasks are blocked.
    pub async fn run(&self, options: RunOptions) -> CommandResult<RunOutcome> {
        let mut config = self.gated_config(Phase::Task).await?;

        if options.resume {
            let resumed = self.tasks.resume_current_task().await?;
            return Ok(resumed.map_or(RunOutcome::NothingToResume, RunOutcome::Resumed));
        }
        if options.dry_run {
            if options.all {
                return Ok(RunOutcome::PendingPreview(
                    self.tasks.preview_pending().await?,
                ));
            }
            return Ok(RunOutcome::NextPreview(
                self.tasks.preview_next_task().await?,
            ));
        }

        if let Some(active) = self.tasks.in_progress_task().await? {
            return Err(CommandError::TaskAlreadyInProgress(active.id().clone()));
        }
        match self.tasks.start_next_task().await {
            Ok(task) => {
                self.advance(&mut config, Phase::Run).await?;
                Ok(RunOutcome::Started(task))
            }
            Err(TaskServiceError::AllTasksCompleted) => Ok(RunOutcome::AllCompleted),
            Err(err) => Err(err.into()),
        }
    }

    /// Marks the task in progress as completed.
    ///
    /// Requires phase `run`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Phase`] before the run phase and
    /// [`CommandError::Task`] when persistence fails.
    pub async fn done(&self) -> CommandResult<DoneOutcome> {
        self.gated_config(Phase::Run).await?;
        let Some(task) = self.tasks.complete_current_task().await? else {
            return Ok(DoneOutcome::NoTaskInProgress);
        };
        let remaining = self.tasks.progress().await?.pending;
        Ok(DoneOutcome::Completed { task, remaining })
    }

    /// Applies or previews a review verdict.
    ///
    /// Requires phase `run`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Task`] when the named task does not exist or
    /// no task qualifies for review.
    pub async fn review(&self, options: ReviewOptions) -> CommandResult<ReviewOutcome> {
        self.gated_config(Phase::Run).await?;
        let mut request = ReviewRequest::new();
        if let Some(task_id) = options.task {
            request = request.for_task(task_id);
        }
        if let Some(verdict) = options.verdict {
            request = request.with_verdict(verdict);
        }
        if let Some(comment) = options.comment {
            request = request.with_comment(comment);
        }
        Ok(self.tasks.review_task(request).await?)
    }

    /// Compacts the history ledger and archives stale log files.
    ///
    /// Not phase-gated.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::History`] or [`CommandError::LogStore`] when
    /// the ledger or log directory cannot be rewritten.
    pub async fn compact(&self, options: CompactOptions) -> CommandResult<CompactOutcome> {
        let keep = options
            .keep
            .unwrap_or_else(|| self.settings.keep_recent());
        let days = options
            .days
            .unwrap_or_else(|| self.settings.log_retention_days());
        debug!(keep, days, "compacting history and logs");

        let compaction = self.tasks.ledger().compact(keep).await?;
        let archived_logs = self.retention.sweep(days).await?;
        Ok(CompactOutcome {
            compaction,
            archived_logs,
        })
    }

    /// Reports the phase, task progress, and history counts.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Project`] when the configuration cannot be
    /// read and [`CommandError::Task`] when the task index is malformed.
    pub async fn status(&self) -> CommandResult<StatusReport> {
        let config = self.project.load_config().await?;
        let graph = match self.tasks.load_graph().await {
            Ok(graph) => Some(graph),
            Err(TaskServiceError::Repository(TaskGraphRepositoryError::NotFound)) => None,
            Err(err) => return Err(err.into()),
        };
        let history = self.tasks.ledger().history().await?.summarize();
        Ok(StatusReport {
            project_name: config.project_name().to_owned(),
            phase: config.current_phase(),
            progress: graph.as_ref().map(TaskGraph::progress),
            tasks: graph
                .map(|loaded| loaded.tasks().to_vec())
                .unwrap_or_default(),
            history,
        })
    }

    async fn gated_config(&self, required: Phase) -> CommandResult<ProjectConfig> {
        let config = self.project.load_config().await?;
        assert_min_phase(config.current_phase(), required)?;
        Ok(config)
    }

    async fn advance(&self, config: &mut ProjectConfig, phase: Phase) -> CommandResult<Phase> {
        if config.advance_to(phase) {
            self.project.save_config(config).await?;
            info!(phase = %config.current_phase(), "project phase advanced");
        }
        Ok(config.current_phase())
    }
}
