//! Live history log at `logs/history.json` plus dated archives.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;

use crate::history::{
    domain::HistoryLog,
    ports::{HistoryRepository, HistoryRepositoryResult},
};
use crate::project::domain::layout;
use crate::storage::{ProjectDir, run_blocking};

/// History repository inside a project state directory.
#[derive(Debug, Clone)]
pub struct FsHistoryRepository {
    dir: ProjectDir,
}

impl FsHistoryRepository {
    /// Creates a repository rooted at the project's state directory.
    #[must_use]
    pub const fn new(dir: ProjectDir) -> Self {
        Self { dir }
    }

    async fn load(&self, path: Utf8PathBuf) -> HistoryRepositoryResult<HistoryLog> {
        let dir = self.dir.clone();
        let log = run_blocking(move || dir.read_json_optional::<HistoryLog>(&path)).await?;
        Ok(log.unwrap_or_default())
    }

    async fn save(&self, path: Utf8PathBuf, log: &HistoryLog) -> HistoryRepositoryResult<()> {
        let dir = self.dir.clone();
        let snapshot = log.clone();
        run_blocking(move || dir.write_json(&path, &snapshot)).await?;
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for FsHistoryRepository {
    async fn load_live(&self) -> HistoryRepositoryResult<HistoryLog> {
        self.load(Utf8Path::new(layout::HISTORY_FILE).to_path_buf())
            .await
    }

    async fn save_live(&self, log: &HistoryLog) -> HistoryRepositoryResult<()> {
        self.save(Utf8Path::new(layout::HISTORY_FILE).to_path_buf(), log)
            .await
    }

    async fn load_archive(&self, date: NaiveDate) -> HistoryRepositoryResult<HistoryLog> {
        self.load(Utf8PathBuf::from(layout::history_archive_file(date)))
            .await
    }

    async fn save_archive(
        &self,
        date: NaiveDate,
        log: &HistoryLog,
    ) -> HistoryRepositoryResult<()> {
        self.save(Utf8PathBuf::from(layout::history_archive_file(date)), log)
            .await
    }
}
