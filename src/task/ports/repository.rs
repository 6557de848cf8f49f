//! Repository port for the persisted task index.

use crate::task::domain::TaskGraph;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task graph repository operations.
pub type TaskGraphRepositoryResult<T> = Result<T, TaskGraphRepositoryError>;

/// Task graph persistence contract.
///
/// The whole graph is loaded and saved as one document; there is no
/// per-task access and no concurrent-writer protection.
#[async_trait]
pub trait TaskGraphRepository: Send + Sync {
    /// Loads the persisted graph.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGraphRepositoryError::NotFound`] when no graph has been
    /// stored yet and [`TaskGraphRepositoryError::Schema`] when the stored
    /// document does not have the expected shape.
    async fn load(&self) -> TaskGraphRepositoryResult<TaskGraph>;

    /// Replaces the persisted graph.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGraphRepositoryError::Persistence`] when the write fails.
    async fn save(&self, graph: &TaskGraph) -> TaskGraphRepositoryResult<()>;
}

/// Errors returned by task graph repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGraphRepositoryError {
    /// No task graph has been stored yet.
    #[error("task index not found; run `codinghelper task` first")]
    NotFound,

    /// The stored task graph failed validation.
    #[error("task index is malformed: {0}")]
    Schema(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskGraphRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
