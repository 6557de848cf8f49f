//! Step sequencing for the guided workflow.

use std::fmt;

/// A top-level workflow command the flow runner can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowCommand {
    /// Scaffold the project.
    Init,
    /// Gather requirements.
    Plan,
    /// Write the technical spec.
    Spec,
    /// Split requirements into tasks.
    Task,
    /// Start the next runnable task.
    Run,
    /// Mark the current task completed.
    Done,
    /// Review a finished task.
    Review,
}

impl WorkflowCommand {
    /// Returns the command-line name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Plan => "plan",
            Self::Spec => "spec",
            Self::Task => "task",
            Self::Run => "run",
            Self::Done => "done",
            Self::Review => "review",
        }
    }

    /// Whether the flow runner stops after executing this command.
    ///
    /// `run` hands over to the coding agent and `review` needs a human
    /// verdict, so neither chains further.
    #[must_use]
    pub const fn is_stopping_point(self) -> bool {
        matches!(self, Self::Run | Self::Review)
    }
}

impl fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested follow-up command with a human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStep {
    /// Command to execute.
    pub command: WorkflowCommand,
    /// Prompt label shown when asking to advance.
    pub label: &'static str,
}

/// Returns the step that naturally follows `completed`, if any.
///
/// `pending_remaining` only matters after `done`: pending work loops back to
/// `run`, otherwise the flow moves on to `review`.
#[must_use]
pub const fn next_step(completed: WorkflowCommand, pending_remaining: bool) -> Option<FlowStep> {
    let step = match completed {
        WorkflowCommand::Init => FlowStep {
            command: WorkflowCommand::Plan,
            label: "gather requirements",
        },
        WorkflowCommand::Plan => FlowStep {
            command: WorkflowCommand::Spec,
            label: "write the technical spec",
        },
        WorkflowCommand::Spec => FlowStep {
            command: WorkflowCommand::Task,
            label: "split requirements into tasks",
        },
        WorkflowCommand::Task => FlowStep {
            command: WorkflowCommand::Run,
            label: "start the first task",
        },
        WorkflowCommand::Done if pending_remaining => FlowStep {
            command: WorkflowCommand::Run,
            label: "start the next task",
        },
        WorkflowCommand::Done => FlowStep {
            command: WorkflowCommand::Review,
            label: "review finished work",
        },
        WorkflowCommand::Run | WorkflowCommand::Review => return None,
    };
    Some(step)
}
