//! Adapts command handlers to the flow runner's step executor.

use super::{CommandContext, ReviewOptions, RunOptions, TaskListApproval};
use crate::history::ports::{HistoryRepository, LogFileStore};
use crate::project::ports::ProjectStore;
use crate::task::ports::TaskGraphRepository;
use crate::workflow::{
    domain::WorkflowCommand,
    services::{StepExecutor, StepResult},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::warn;

/// Executes `task`, `run`, `done`, and `review` with default options.
///
/// Scaffolding and planning commands are interactive and report
/// [`StepResult::Unsupported`].
pub struct CommandStepExecutor<P, T, H, L, C, A>
where
    P: ProjectStore,
    T: TaskGraphRepository,
    H: HistoryRepository,
    L: LogFileStore,
    C: Clock + Send + Sync,
    A: TaskListApproval,
{
    context: Arc<CommandContext<P, T, H, L, C>>,
    approval: Arc<A>,
}

impl<P, T, H, L, C, A> CommandStepExecutor<P, T, H, L, C, A>
where
    P: ProjectStore,
    T: TaskGraphRepository,
    H: HistoryRepository,
    L: LogFileStore,
    C: Clock + Send + Sync,
    A: TaskListApproval,
{
    /// Creates an executor over `context`, asking `approval` before storing
    /// a task list.
    #[must_use]
    pub const fn new(context: Arc<CommandContext<P, T, H, L, C>>, approval: Arc<A>) -> Self {
        Self { context, approval }
    }
}

#[async_trait]
impl<P, T, H, L, C, A> StepExecutor for CommandStepExecutor<P, T, H, L, C, A>
where
    P: ProjectStore,
    T: TaskGraphRepository,
    H: HistoryRepository,
    L: LogFileStore,
    C: Clock + Send + Sync,
    A: TaskListApproval,
{
    async fn execute(&self, command: WorkflowCommand) -> StepResult {
        let result = match command {
            WorkflowCommand::Task => self.context.task(self.approval.as_ref()).await.map(drop),
            WorkflowCommand::Run => self.context.run(RunOptions::default()).await.map(drop),
            WorkflowCommand::Done => self.context.done().await.map(drop),
            WorkflowCommand::Review => self
                .context
                .review(ReviewOptions::default())
                .await
                .map(drop),
            WorkflowCommand::Init | WorkflowCommand::Plan | WorkflowCommand::Spec => {
                return StepResult::Unsupported;
            }
        };
        match result {
            Ok(()) => StepResult::Completed,
            Err(err) => {
                warn!(%command, error = %err, "workflow step failed");
                StepResult::Failed(err.to_string())
            }
        }
    }

    async fn pending_task_count(&self) -> Option<usize> {
        self.context
            .task_service()
            .progress()
            .await
            .ok()
            .map(|progress| progress.pending)
    }
}
