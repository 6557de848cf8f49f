//! Project store backed by the `.codinghelper/` directory.

use async_trait::async_trait;
use camino::Utf8Path;

use crate::project::{
    domain::{ProjectConfig, layout},
    ports::{ProjectStore, ProjectStoreError, ProjectStoreResult},
};
use crate::storage::{ProjectDir, StorageError, run_blocking};

/// Reads and writes project files inside a state directory.
#[derive(Debug, Clone)]
pub struct FsProjectStore {
    dir: ProjectDir,
}

impl FsProjectStore {
    /// Creates a store rooted at the project's state directory.
    #[must_use]
    pub const fn new(dir: ProjectDir) -> Self {
        Self { dir }
    }

    async fn read_document(&self, name: &'static str) -> ProjectStoreResult<String> {
        let dir = self.dir.clone();
        run_blocking(move || dir.read_string(Utf8Path::new(name)))
            .await
            .map_err(|err| map_storage_error(name, err))
    }
}

fn map_storage_error(name: &str, err: StorageError) -> ProjectStoreError {
    match err {
        StorageError::NotFound(_) => ProjectStoreError::MissingFile(name.to_owned()),
        StorageError::Schema { message, .. } => ProjectStoreError::Schema(name.to_owned(), message),
        other => ProjectStoreError::persistence(other),
    }
}

#[async_trait]
impl ProjectStore for FsProjectStore {
    async fn load_config(&self) -> ProjectStoreResult<ProjectConfig> {
        let dir = self.dir.clone();
        run_blocking(move || dir.read_json(Utf8Path::new(layout::CONFIG_FILE)))
            .await
            .map_err(|err| map_storage_error(layout::CONFIG_FILE, err))
    }

    async fn save_config(&self, config: &ProjectConfig) -> ProjectStoreResult<()> {
        let dir = self.dir.clone();
        let snapshot = config.clone();
        run_blocking(move || dir.write_json(Utf8Path::new(layout::CONFIG_FILE), &snapshot))
            .await
            .map_err(|err| map_storage_error(layout::CONFIG_FILE, err))
    }

    async fn read_requirements(&self) -> ProjectStoreResult<String> {
        self.read_document(layout::REQUIREMENTS_FILE).await
    }

    async fn read_spec(&self) -> ProjectStoreResult<String> {
        self.read_document(layout::SPEC_FILE).await
    }
}
