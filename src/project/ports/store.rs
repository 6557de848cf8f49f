//! Project store port: configuration and planning documents.

use crate::project::domain::ProjectConfig;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project store operations.
pub type ProjectStoreResult<T> = Result<T, ProjectStoreError>;

/// Access to the project configuration and planning documents.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Loads `config.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::MissingFile`] when the configuration has
    /// not been written, [`ProjectStoreError::Schema`] when it is malformed.
    async fn load_config(&self) -> ProjectStoreResult<ProjectConfig>;

    /// Replaces `config.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Persistence`] when the write fails.
    async fn save_config(&self, config: &ProjectConfig) -> ProjectStoreResult<()>;

    /// Reads the requirements document.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::MissingFile`] when it has not been
    /// written yet.
    async fn read_requirements(&self) -> ProjectStoreResult<String>;

    /// Reads the technical spec document.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::MissingFile`] when it has not been
    /// written yet.
    async fn read_spec(&self) -> ProjectStoreResult<String>;
}

/// Errors returned by project store implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectStoreError {
    /// No `.codinghelper/` directory was found from the start directory up.
    #[error("project not initialized; run `codinghelper init` first")]
    NotInitialized,

    /// A required project file is missing.
    #[error("{0} not found in the project state directory")]
    MissingFile(String),

    /// A project file failed validation.
    #[error("{0} is malformed: {1}")]
    Schema(String, String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Whether the error is a user-correctable project state problem.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::NotInitialized | Self::MissingFile(_))
    }
}
