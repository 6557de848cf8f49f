//! Iterative loop offering to chain one workflow command into the next.

use crate::workflow::domain::{FlowStep, WorkflowCommand, next_step};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of executing one workflow command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// The command finished successfully.
    Completed,
    /// The command ran and failed.
    Failed(String),
    /// The executor does not implement this command.
    Unsupported,
}

/// Executes workflow commands on behalf of the flow runner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StepExecutor: Send + Sync {
    /// Runs `command` to completion.
    async fn execute(&self, command: WorkflowCommand) -> StepResult;

    /// Returns the number of pending tasks, or `None` when the task index
    /// cannot be read.
    async fn pending_task_count(&self) -> Option<usize>;
}

/// Asks whether to advance to a suggested step.
#[cfg_attr(test, mockall::automock)]
pub trait AdvancePrompt: Send + Sync {
    /// Returns `true` to run `step` now.
    fn confirm(&self, step: &FlowStep) -> bool;
}

/// Why the flow runner stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStop {
    /// The last command has no natural follow-up.
    NoFollowUp,
    /// The last command is a natural stopping point.
    StoppingPoint(WorkflowCommand),
    /// The user declined the suggested step.
    Declined(FlowStep),
    /// A step failed.
    Failed {
        /// Command that failed.
        command: WorkflowCommand,
        /// Failure description from the executor.
        message: String,
    },
    /// The executor cannot run the suggested command.
    Unsupported(WorkflowCommand),
}

/// Summary of one flow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowReport {
    /// Commands executed by the runner, in order.
    pub executed: Vec<WorkflowCommand>,
    /// Reason the loop ended.
    pub stop: FlowStop,
}

/// Chains workflow commands after one completes.
pub struct FlowRunner<E, P>
where
    E: StepExecutor,
    P: AdvancePrompt,
{
    executor: Arc<E>,
    prompt: Arc<P>,
}

impl<E, P> FlowRunner<E, P>
where
    E: StepExecutor,
    P: AdvancePrompt,
{
    /// Creates a runner over the given collaborators.
    #[must_use]
    pub const fn new(executor: Arc<E>, prompt: Arc<P>) -> Self {
        Self { executor, prompt }
    }

    /// Offers follow-up steps after `completed` until one of the stop
    /// conditions in [`FlowStop`] is reached.
    pub async fn advance_from(&self, completed: WorkflowCommand) -> FlowReport {
        let mut executed = Vec::new();
        let mut last = completed;

        let stop = loop {
            if last.is_stopping_point() {
                break FlowStop::StoppingPoint(last);
            }
            let Some(step) = self.follow_up(last).await else {
                break FlowStop::NoFollowUp;
            };
            if !self.prompt.confirm(&step) {
                info!(next = %step.command, "advance declined");
                break FlowStop::Declined(step);
            }

            debug!(command = %step.command, "advancing workflow");
            match self.executor.execute(step.command).await {
                StepResult::Completed => {
                    executed.push(step.command);
                    last = step.command;
                }
                StepResult::Failed(message) => {
                    break FlowStop::Failed {
                        command: step.command,
                        message,
                    };
                }
                StepResult::Unsupported => break FlowStop::Unsupported(step.command),
            }
        };

        FlowReport { executed, stop }
    }

    async fn follow_up(&self, completed: WorkflowCommand) -> Option<FlowStep> {
        if completed != WorkflowCommand::Done {
            return next_step(completed, false);
        }
        let pending = self.executor.pending_task_count().await?;
        next_step(completed, pending > 0)
    }
}
