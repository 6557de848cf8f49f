//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or querying task graph values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A task identifier was empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The referenced task does not exist in the graph.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A parse position does not fit into a task priority.
    #[error("task position {0} cannot be represented as a priority")]
    PriorityOverflow(usize),
}

/// Error returned while parsing task statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
