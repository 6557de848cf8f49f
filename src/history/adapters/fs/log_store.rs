//! Review records and the retention sweep over `logs/`.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};

use crate::history::{
    domain::ReviewRecord,
    ports::{HistoryRepositoryResult, LogFileStore},
};
use crate::project::domain::layout;
use crate::storage::{ProjectDir, run_blocking};

/// Log file store inside a project state directory.
#[derive(Debug, Clone)]
pub struct FsLogFileStore {
    dir: ProjectDir,
}

impl FsLogFileStore {
    /// Creates a store rooted at the project's state directory.
    #[must_use]
    pub const fn new(dir: ProjectDir) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl LogFileStore for FsLogFileStore {
    async fn write_review_record(&self, record: &ReviewRecord) -> HistoryRepositoryResult<String> {
        let path = layout::review_record_file(
            record.task_id.as_str(),
            record.timestamp.timestamp_millis(),
        );
        let dir = self.dir.clone();
        let snapshot = record.clone();
        let target = Utf8PathBuf::from(&path);
        run_blocking(move || dir.write_json(&target, &snapshot)).await?;
        Ok(path)
    }

    async fn archive_files_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> HistoryRepositoryResult<Vec<String>> {
        let dir = self.dir.clone();
        let moved = run_blocking(move || {
            let logs = Utf8Path::new(layout::LOGS_DIR);
            let mut moved = Vec::new();
            for entry in dir.list_files(logs)? {
                if !entry.is_file
                    || entry.name == layout::HISTORY_FILE_NAME
                    || entry.name == layout::LOG_ARCHIVE_DIR_NAME
                    || entry.modified >= cutoff
                {
                    continue;
                }
                dir.move_into(
                    &logs.join(&entry.name),
                    Utf8Path::new(layout::LOG_ARCHIVE_DIR),
                )?;
                moved.push(entry.name);
            }
            Ok(moved)
        })
        .await?;
        Ok(moved)
    }
}
