//! Task graph repository backed by `tasks/index.json`.

use async_trait::async_trait;
use camino::Utf8Path;

use crate::project::domain::layout;
use crate::storage::{ProjectDir, StorageError, run_blocking};
use crate::task::{
    domain::TaskGraph,
    ports::{TaskGraphRepository, TaskGraphRepositoryError, TaskGraphRepositoryResult},
};

/// Reads and writes the task index inside a project state directory.
#[derive(Debug, Clone)]
pub struct FsTaskGraphRepository {
    dir: ProjectDir,
}

impl FsTaskGraphRepository {
    /// Creates a repository rooted at the project's state directory.
    #[must_use]
    pub const fn new(dir: ProjectDir) -> Self {
        Self { dir }
    }
}

impl From<StorageError> for TaskGraphRepositoryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => Self::NotFound,
            StorageError::Schema { path, message } => Self::Schema(format!("{path}: {message}")),
            other => Self::persistence(other),
        }
    }
}

#[async_trait]
impl TaskGraphRepository for FsTaskGraphRepository {
    async fn load(&self) -> TaskGraphRepositoryResult<TaskGraph> {
        let dir = self.dir.clone();
        let graph = run_blocking(move || dir.read_json(Utf8Path::new(layout::TASK_INDEX_FILE)))
            .await?;
        Ok(graph)
    }

    async fn save(&self, graph: &TaskGraph) -> TaskGraphRepositoryResult<()> {
        let dir = self.dir.clone();
        let snapshot = graph.clone();
        run_blocking(move || dir.write_json(Utf8Path::new(layout::TASK_INDEX_FILE), &snapshot))
            .await?;
        Ok(())
    }
}
