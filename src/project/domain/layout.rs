//! Relative paths inside the project state directory.

use chrono::NaiveDate;

/// Name of the state directory at the project root.
pub const STATE_DIR: &str = ".codinghelper";
/// Project configuration file.
pub const CONFIG_FILE: &str = "config.json";
/// Requirements document.
pub const REQUIREMENTS_FILE: &str = "requirements.md";
/// Technical spec document.
pub const SPEC_FILE: &str = "spec.md";
/// Persisted task graph.
pub const TASK_INDEX_FILE: &str = "tasks/index.json";
/// Directory holding history and review logs.
pub const LOGS_DIR: &str = "logs";
/// Live history log.
pub const HISTORY_FILE: &str = "logs/history.json";
/// File name of the live history log inside [`LOGS_DIR`].
pub const HISTORY_FILE_NAME: &str = "history.json";
/// Directory swept log files are moved into.
pub const LOG_ARCHIVE_DIR: &str = "logs/archive";
/// Name of [`LOG_ARCHIVE_DIR`] inside [`LOGS_DIR`].
pub const LOG_ARCHIVE_DIR_NAME: &str = "archive";

/// Returns the dated history archive path for `date`.
#[must_use]
pub fn history_archive_file(date: NaiveDate) -> String {
    format!("{LOGS_DIR}/history-archive-{}.json", date.format("%Y-%m-%d"))
}

/// Returns the review record path for a task reviewed at `unix_millis`.
#[must_use]
pub fn review_record_file(task_id: &str, unix_millis: i64) -> String {
    format!("{LOGS_DIR}/review-{task_id}-{unix_millis}.json")
}
