//! Approval gate for generated task lists.

use crate::task::domain::TaskGraph;

/// Decides whether a freshly built task list may be stored.
#[cfg_attr(test, mockall::automock)]
pub trait TaskListApproval: Send + Sync {
    /// Returns `true` to accept `graph`.
    fn approve(&self, graph: &TaskGraph) -> bool;
}

/// Accepts every task list without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

impl TaskListApproval for AutoApprove {
    fn approve(&self, _graph: &TaskGraph) -> bool {
        true
    }
}
