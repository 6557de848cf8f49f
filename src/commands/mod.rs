//! Command handlers behind the `codinghelper` CLI.
//!
//! Each handler loads the project configuration, checks the phase gate,
//! delegates to the task and history services, and advances the recorded
//! phase. Handlers return typed outcomes; rendering them is left to the
//! binary. [`CommandError::is_domain`] separates expected workflow
//! rejections from infrastructure failures.

mod approval;
mod context;
mod error;
mod flow;
mod fs;
mod options;
mod outcome;

pub use approval::{AutoApprove, TaskListApproval};
pub use context::CommandContext;
pub use error::{CommandError, CommandResult};
pub use flow::CommandStepExecutor;
pub use fs::{FsCommandContext, open_project};
pub use options::{CompactOptions, ReviewOptions, RunOptions};
pub use outcome::{CompactOutcome, DoneOutcome, RunOutcome, StatusReport, TaskOutcome};

#[cfg(test)]
pub(crate) use approval::MockTaskListApproval;

#[cfg(test)]
mod tests;
