//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Identifier of a task inside one task graph.
///
/// Generated identifiers are zero-padded sequence tokens such as `task-001`.
/// Identifiers loaded from a hand-edited index only need to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates the identifier for the task at 1-based `sequence`.
    #[must_use]
    pub fn from_sequence(sequence: usize) -> Self {
        Self(format!("task-{sequence:03}"))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strictly positive scheduling priority; lower values run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(NonZeroU32);

impl Priority {
    /// Creates the priority for the task at 0-based parse `position`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PriorityOverflow`] when the position does
    /// not fit into a `u32` priority.
    pub fn from_position(position: usize) -> Result<Self, TaskDomainError> {
        position
            .checked_add(1)
            .and_then(|value| u32::try_from(value).ok())
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(TaskDomainError::PriorityOverflow(position))
    }

    /// Creates a priority from a raw value, rejecting zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(non_zero) => Some(Self(non_zero)),
            None => None,
        }
    }

    /// Returns the numeric priority.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
