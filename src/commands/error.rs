//! Command-level error classification.

use crate::history::{ports::HistoryRepositoryError, services::HistoryLedgerError};
use crate::project::ports::ProjectStoreError;
use crate::task::{domain::TaskId, services::TaskServiceError};
use crate::workflow::domain::PhaseViolation;
use thiserror::Error;

/// Errors returned by command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The project has not reached the phase the command needs.
    #[error(transparent)]
    Phase(#[from] PhaseViolation),
    /// Project configuration or documents could not be used.
    #[error(transparent)]
    Project(#[from] ProjectStoreError),
    /// A task operation failed.
    #[error(transparent)]
    Task(#[from] TaskServiceError),
    /// Compacting the history ledger failed.
    #[error(transparent)]
    History(#[from] HistoryLedgerError),
    /// Sweeping log files failed.
    #[error(transparent)]
    LogStore(#[from] HistoryRepositoryError),
    /// The generated task list was not approved.
    #[error("task list was not approved; rerun `codinghelper task` after editing requirements")]
    ApprovalDenied,
    /// A task is already in progress.
    #[error("task {0} is already in progress; finish it with `codinghelper done` or continue with `codinghelper run --resume`")]
    TaskAlreadyInProgress(TaskId),
}

impl CommandError {
    /// Whether the error is an expected workflow rejection.
    ///
    /// Domain errors are reported as warnings; everything else is a fatal
    /// failure of the invocation. Both exit non-zero.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        match self {
            Self::Phase(_) | Self::ApprovalDenied | Self::TaskAlreadyInProgress(_) => true,
            Self::Project(err) => err.is_domain(),
            Self::Task(err) => err.is_domain(),
            Self::History(_) | Self::LogStore(_) => false,
        }
    }
}

/// Result type for command handlers.
pub type CommandResult<T> = Result<T, CommandError>;
