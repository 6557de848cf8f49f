//! History log summaries, filtering, and serialized shape.

use crate::history::domain::{
    HistoryAction, HistoryEntry, HistoryLog, LedgerSettings, ReviewVerdict,
};
use crate::task::domain::TaskId;
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

fn task(id: &str) -> TaskId {
    TaskId::new(id).expect("valid task id")
}

fn entry(id: &str, action: HistoryAction) -> HistoryEntry {
    let at = Utc
        .with_ymd_and_hms(2026, 2, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    HistoryEntry::new(task(id), action, at, None)
}

#[fixture]
fn log() -> HistoryLog {
    HistoryLog::from_entries(vec![
        entry("task-001", HistoryAction::Started),
        entry("task-001", HistoryAction::Completed),
        entry("task-002", HistoryAction::Started),
        entry("task-002", HistoryAction::Rejected),
        entry("task-002", HistoryAction::Started),
        entry("task-002", HistoryAction::Resumed),
    ])
}

#[rstest]
fn summarize_counts_each_action(log: HistoryLog) {
    let summary = log.summarize();
    assert_eq!(summary.total, 6);
    assert_eq!(summary.started, 3);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.resumed, 1);
}

#[rstest]
fn entries_for_task_preserves_order(log: HistoryLog) {
    let actions: Vec<HistoryAction> = log
        .entries_for_task(&task("task-002"))
        .into_iter()
        .map(HistoryEntry::action)
        .collect();
    assert_eq!(
        actions,
        vec![
            HistoryAction::Started,
            HistoryAction::Rejected,
            HistoryAction::Started,
            HistoryAction::Resumed,
        ]
    );
}

#[rstest]
#[case(10, 0)]
#[case(6, 0)]
#[case(4, 2)]
#[case(0, 6)]
fn split_off_older_keeps_the_newest(
    mut log: HistoryLog,
    #[case] keep: usize,
    #[case] expected_archived: usize,
) {
    let older = log.split_off_older(keep);
    assert_eq!(older.len(), expected_archived);
    assert_eq!(log.len(), 6 - expected_archived);
}

#[rstest]
fn split_off_older_returns_the_oldest_prefix(mut log: HistoryLog) {
    let original = log.clone();
    let older = log.split_off_older(2);

    assert_eq!(older.as_slice(), &original.entries()[..4]);
    assert_eq!(log.entries(), &original.entries()[4..]);
}

#[rstest]
fn entry_serializes_camel_case_and_omits_empty_note() {
    let value = serde_json::to_value(entry("task-003", HistoryAction::Resumed))
        .expect("serialize entry");

    assert_eq!(value["taskId"], "task-003");
    assert_eq!(value["action"], "resumed");
    assert!(value.get("note").is_none());
}

#[rstest]
fn missing_entries_key_loads_as_empty_log() {
    let log: HistoryLog = serde_json::from_str("{}").expect("parse empty log");
    assert!(log.is_empty());
}

#[rstest]
fn unknown_action_is_rejected() {
    let raw = r#"{"entries":[{"taskId":"task-001","action":"paused","timestamp":"2026-01-01T00:00:00Z"}]}"#;
    assert!(serde_json::from_str::<HistoryLog>(raw).is_err());
}

#[rstest]
fn ledger_settings_default_and_override() {
    let defaults = LedgerSettings::default();
    assert_eq!(defaults.auto_compact_threshold(), 100);
    assert_eq!(defaults.keep_recent(), 50);
    assert_eq!(defaults.log_retention_days(), 30);

    let tuned = defaults.with_keep_recent(5).with_log_retention_days(7);
    assert_eq!(tuned.keep_recent(), 5);
    assert_eq!(tuned.log_retention_days(), 7);
    assert_eq!(tuned.auto_compact_threshold(), 100);
}

#[rstest]
fn review_verdict_has_default_comments() {
    assert_eq!(ReviewVerdict::Approved.as_str(), "approved");
    assert_ne!(
        ReviewVerdict::Approved.default_comment(),
        ReviewVerdict::Rejected.default_comment()
    );
}
