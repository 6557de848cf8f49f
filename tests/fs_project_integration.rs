//! End-to-end command tests against a real `.codinghelper/` directory.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use codinghelper::commands::{
    AutoApprove, CommandError, CompactOptions, DoneOutcome, FsCommandContext, ReviewOptions,
    RunOptions, RunOutcome, open_project,
};
use codinghelper::history::domain::ReviewVerdict;
use codinghelper::project::ports::ProjectStoreError;
use codinghelper::task::services::ReviewOutcome;
use codinghelper::workflow::domain::Phase;
use eyre::{Result, WrapErr, ensure, eyre};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::Value;
use tempfile::TempDir;

const REQUIREMENTS: &str = "\
# Notes app

## Storage
Persist notes on disk.

## Search
Find notes by keyword.
";

struct Project {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl Project {
    fn state(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(".codinghelper").join(relative)
    }

    fn read_json(&self, relative: &str) -> Result<Value> {
        let raw = std::fs::read_to_string(self.state(relative))
            .wrap_err_with(|| format!("read {relative}"))?;
        serde_json::from_str(&raw).wrap_err_with(|| format!("parse {relative}"))
    }

    fn open(&self, start: &Utf8Path) -> Result<FsCommandContext<DefaultClock>> {
        let (root, context) = open_project(start, Arc::new(DefaultClock))?;
        ensure!(root == self.root, "located {root}, expected {}", self.root);
        Ok(context)
    }
}

#[fixture]
fn project() -> Project {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 temp dir");
    let state = root.join(".codinghelper");
    std::fs::create_dir_all(root.join("src/notes")).expect("create nested source dir");
    std::fs::create_dir_all(&state).expect("create state dir");
    std::fs::write(
        state.join("config.json"),
        r#"{"projectName":"notes","currentPhase":"spec","editor":"ignored"}"#,
    )
    .expect("write config");
    std::fs::write(state.join("requirements.md"), REQUIREMENTS).expect("write requirements");
    std::fs::write(state.join("spec.md"), "# Spec\nA CLI.").expect("write spec");
    Project { _temp: temp, root }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn commands_persist_state_across_invocations(project: Project) -> Result<()> {
    let nested = project.root.join("src/notes");
    let context = project.open(&nested)?;

    let generated = context.task(&AutoApprove).await?;
    ensure!(generated.graph.len() == 2, "expected two tasks");
    let index = project.read_json("tasks/index.json")?;
    ensure!(
        index["executionOrder"] == serde_json::json!(["task-001", "task-002"]),
        "unexpected execution order: {}",
        index["executionOrder"]
    );
    ensure!(index["tasks"][1]["dependencies"] == serde_json::json!(["task-001"]));
    ensure!(index["tasks"][0]["status"] == "pending");

    let started = context.run(RunOptions::default()).await?;
    ensure!(matches!(started, RunOutcome::Started(_)), "got {started:?}");
    let done = context.done().await?;
    ensure!(
        matches!(done, DoneOutcome::Completed { remaining: 1, .. }),
        "got {done:?}"
    );

    let reopened = project.open(&project.root)?;
    let status = reopened.status().await?;
    ensure!(status.phase == Phase::Run, "phase is {}", status.phase);
    let progress = status.progress.ok_or_else(|| eyre!("missing progress"))?;
    ensure!(progress.completed == 1 && progress.pending == 1);

    let config = project.read_json("config.json")?;
    ensure!(config["currentPhase"] == "run");
    ensure!(config["projectName"] == "notes");
    let history = project.read_json("logs/history.json")?;
    ensure!(history["entries"][0]["action"] == "started");
    ensure!(history["entries"][1]["action"] == "completed");
    ensure!(history["entries"][1]["taskId"] == "task-001");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn review_and_compact_write_log_files(project: Project) -> Result<()> {
    let context = project.open(&project.root)?;
    context.task(&AutoApprove).await?;
    context.run(RunOptions::default()).await?;

    let outcome = context
        .review(ReviewOptions {
            verdict: Some(ReviewVerdict::Approved),
            ..ReviewOptions::default()
        })
        .await?;
    let ReviewOutcome::Recorded { path, .. } = outcome else {
        return Err(eyre!("expected a recorded review, got {outcome:?}"));
    };
    let record = project.read_json(&path)?;
    ensure!(record["status"] == "approved");
    ensure!(record["reviewer"] == "user");
    ensure!(record["taskId"] == "task-001");

    let compacted = context
        .compact(CompactOptions {
            keep: Some(0),
            days: None,
        })
        .await?;
    ensure!(compacted.compaction.archived == 2, "got {compacted:?}");
    ensure!(compacted.archived_logs.is_empty(), "fresh review log was swept");

    let history = project.read_json("logs/history.json")?;
    ensure!(history["entries"] == serde_json::json!([]));
    let archives: Vec<_> = std::fs::read_dir(project.state("logs"))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("history-archive-"))
        .collect();
    ensure!(archives.len() == 1, "archives: {archives:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn uninitialised_directory_is_reported() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let start = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
        .map_err(|path| eyre!("non-utf-8 temp dir {}", path.display()))?;

    let result = open_project(&start, Arc::new(DefaultClock));

    ensure!(matches!(
        result,
        Err(CommandError::Project(ProjectStoreError::NotInitialized))
    ));
    Ok(())
}
