//! Application services for task graph orchestration.

mod execution;
mod review;

pub use execution::{TaskService, TaskServiceError, TaskServiceResult};
pub use review::{DEFAULT_REVIEWER, ReviewOutcome, ReviewRequest};
