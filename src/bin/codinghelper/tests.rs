//! Unit tests for argument parsing and output rendering.

use super::{Cli, Command, prompt::parse_answer, render};
use chrono::{TimeZone, Utc};
use clap::Parser;
use codinghelper::commands::{DoneOutcome, RunOutcome};
use codinghelper::history::domain::ReviewVerdict;
use codinghelper::task::domain::{
    PersistedTaskData, Priority, Task, TaskId, TaskStatus,
};
use codinghelper::workflow::{
    domain::{FlowStep, WorkflowCommand},
    services::{FlowReport, FlowStop},
};
use rstest::rstest;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("codinghelper").chain(args.iter().copied()))
        .expect("arguments should parse")
}

fn sample_task(n: usize, dependencies: Vec<TaskId>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_sequence(n),
        title: format!("Section {n}"),
        status: TaskStatus::Pending,
        dependencies,
        priority: Priority::new(u32::try_from(n).expect("small n")).expect("non-zero"),
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
        completed_at: None,
    })
}

fn rendered(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buffer = Vec::new();
    write(&mut buffer).expect("render into buffer");
    String::from_utf8(buffer).expect("utf-8 output")
}

#[rstest]
fn review_flags_map_to_verdicts() {
    let Command::Review(args) = parse(&["review", "-r", "-c", "missing tests", "-t", "task-002"])
        .command
    else {
        panic!("expected review command");
    };

    let options = args.into_options();

    assert_eq!(options.verdict, Some(ReviewVerdict::Rejected));
    assert_eq!(options.comment.as_deref(), Some("missing tests"));
    assert_eq!(options.task, Some(TaskId::from_sequence(2)));
}

#[rstest]
fn approve_and_reject_conflict() {
    let result = Cli::try_parse_from(["codinghelper", "review", "--approve", "--reject"]);
    assert!(result.is_err());
}

#[rstest]
fn all_requires_dry_run() {
    assert!(Cli::try_parse_from(["codinghelper", "run", "--all"]).is_err());
    assert!(matches!(
        parse(&["run", "--dry-run", "--all"]).command,
        Command::Run {
            dry_run: true,
            all: true,
            resume: false,
        }
    ));
}

#[rstest]
fn compact_accepts_short_flags() {
    assert!(matches!(
        parse(&["compact", "-k", "10", "-d", "7"]).command,
        Command::Compact {
            keep: Some(10),
            days: Some(7),
        }
    ));
}

#[rstest]
fn global_flags_follow_the_subcommand() {
    let cli = parse(&["status", "--no-advance", "--dir", "/tmp/project"]);
    assert!(cli.no_advance);
    assert_eq!(cli.dir.as_deref(), Some(std::path::Path::new("/tmp/project")));
}

#[rstest]
#[case("y", false, true)]
#[case(" YES\n", false, true)]
#[case("n", true, false)]
#[case("\n", true, true)]
#[case("maybe", false, false)]
fn answers_fall_back_to_default(#[case] line: &str, #[case] default: bool, #[case] expected: bool) {
    assert_eq!(parse_answer(line, default), expected);
}

#[rstest]
fn task_list_shows_dependencies() {
    let tasks = [
        sample_task(1, Vec::new()),
        sample_task(2, vec![TaskId::from_sequence(1)]),
    ];

    let output = rendered(|out| render::task_list(out, &tasks));

    assert_eq!(
        output,
        "  task-001 [pending] P1 Section 1\n  task-002 [pending] P2 Section 2 (after task-001)\n"
    );
}

#[rstest]
fn done_points_at_review_when_nothing_is_left() {
    let outcome = DoneOutcome::Completed {
        task: sample_task(3, Vec::new()),
        remaining: 0,
    };

    let output = rendered(|out| render::done(out, &outcome));

    assert!(output.starts_with("Completed task-003: Section 3\n"));
    assert!(output.contains("codinghelper review"));
}

#[rstest]
fn empty_pending_preview_says_so() {
    let output = rendered(|out| render::run(out, &RunOutcome::PendingPreview(Vec::new())));
    assert_eq!(output, "No pending tasks.\n");
}

#[rstest]
fn declined_flow_suggests_the_command() {
    let report = FlowReport {
        executed: Vec::new(),
        stop: FlowStop::Declined(FlowStep {
            command: WorkflowCommand::Run,
            label: "start the next task",
        }),
    };

    let output = rendered(|out| render::flow(out, &report, None));

    assert_eq!(
        output,
        "Run `codinghelper run` when ready to start the next task.\n"
    );
}
