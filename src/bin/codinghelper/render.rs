//! Plain-text rendering of command outcomes.

use codinghelper::commands::{
    CompactOutcome, DoneOutcome, RunOutcome, StatusReport, TaskOutcome,
};
use codinghelper::task::{domain::Task, services::ReviewOutcome};
use codinghelper::workflow::{
    domain::WorkflowCommand,
    services::{FlowReport, FlowStop},
};
use std::io::{self, Write};

pub(crate) fn task_list(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    for task in tasks {
        write!(
            out,
            "  {} [{}] P{} {}",
            task.id(),
            task.status(),
            task.priority(),
            task.title()
        )?;
        if !task.dependencies().is_empty() {
            write!(out, " (after {})", joined(task.dependencies()))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn joined<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn headline(out: &mut impl Write, label: &str, task: &Task) -> io::Result<()> {
    writeln!(out, "{label} {}: {}", task.id(), task.title())
}

pub(crate) fn task(out: &mut impl Write, outcome: &TaskOutcome) -> io::Result<()> {
    writeln!(
        out,
        "Generated {} tasks; phase is now `{}`.",
        outcome.graph.len(),
        outcome.phase
    )?;
    task_list(out, outcome.graph.tasks())
}

pub(crate) fn run(out: &mut impl Write, outcome: &RunOutcome) -> io::Result<()> {
    match outcome {
        RunOutcome::Started(task) => {
            headline(out, "Started", task)?;
            writeln!(out, "Finish it with `codinghelper done`.")
        }
        RunOutcome::Resumed(task) => headline(out, "Resuming", task),
        RunOutcome::NothingToResume => writeln!(out, "No task is in progress."),
        RunOutcome::NextPreview(Some(task)) => headline(out, "Next task", task),
        RunOutcome::NextPreview(None) => writeln!(out, "No task is runnable."),
        RunOutcome::PendingPreview(tasks) if tasks.is_empty() => {
            writeln!(out, "No pending tasks.")
        }
        RunOutcome::PendingPreview(tasks) => {
            writeln!(out, "Pending tasks in execution order:")?;
            task_list(out, tasks)
        }
        RunOutcome::AllCompleted => writeln!(
            out,
            "All tasks are completed. Review them with `codinghelper review`."
        ),
    }
}

pub(crate) fn done(out: &mut impl Write, outcome: &DoneOutcome) -> io::Result<()> {
    match outcome {
        DoneOutcome::Completed { task, remaining } => {
            headline(out, "Completed", task)?;
            if *remaining > 0 {
                writeln!(
                    out,
                    "{remaining} pending task(s) left; start the next with `codinghelper run`."
                )
            } else {
                writeln!(out, "No pending tasks left; review with `codinghelper review`.")
            }
        }
        DoneOutcome::NoTaskInProgress => writeln!(out, "No task is in progress."),
    }
}

pub(crate) fn review(out: &mut impl Write, outcome: &ReviewOutcome) -> io::Result<()> {
    match outcome {
        ReviewOutcome::AwaitingVerdict(task) => {
            writeln!(
                out,
                "Reviewing {}: {} [{}]",
                task.id(),
                task.title(),
                task.status()
            )?;
            writeln!(
                out,
                "Record a verdict with `codinghelper review --approve` or `--reject -c <comment>`."
            )
        }
        ReviewOutcome::Recorded { task, record, path } => {
            writeln!(out, "{} {}: {}", task.id(), record.status, record.comment)?;
            writeln!(out, "Review saved to {path}.")
        }
    }
}

pub(crate) fn compact(out: &mut impl Write, outcome: &CompactOutcome) -> io::Result<()> {
    writeln!(
        out,
        "Archived {} history entries; {} kept live.",
        outcome.compaction.archived, outcome.compaction.remaining
    )?;
    writeln!(
        out,
        "Moved {} log file(s) to the archive.",
        outcome.archived_logs.len()
    )?;
    for name in &outcome.archived_logs {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}

pub(crate) fn status(out: &mut impl Write, report: &StatusReport) -> io::Result<()> {
    writeln!(out, "Project: {}", report.project_name)?;
    writeln!(out, "Phase: {}", report.phase)?;
    match report.progress {
        Some(progress) => writeln!(
            out,
            "Tasks: {}/{} completed, {} in progress, {} pending, {} rejected",
            progress.completed,
            progress.total,
            progress.in_progress,
            progress.pending,
            progress.rejected
        )?,
        None => writeln!(out, "Tasks: none generated yet")?,
    }
    task_list(out, &report.tasks)?;
    let history = &report.history;
    writeln!(
        out,
        "History: {} entries ({} started, {} completed, {} rejected, {} resumed)",
        history.total, history.started, history.completed, history.rejected, history.resumed
    )
}

pub(crate) fn flow(
    out: &mut impl Write,
    report: &FlowReport,
    active: Option<&Task>,
) -> io::Result<()> {
    for command in &report.executed {
        writeln!(out, "Ran `codinghelper {command}`.")?;
    }
    if report.executed.contains(&WorkflowCommand::Run)
        && let Some(task) = active
    {
        headline(out, "Working on", task)?;
    }
    match &report.stop {
        FlowStop::NoFollowUp | FlowStop::StoppingPoint(_) => Ok(()),
        FlowStop::Declined(step) => writeln!(
            out,
            "Run `codinghelper {}` when ready to {}.",
            step.command, step.label
        ),
        FlowStop::Failed { command, message } => {
            writeln!(out, "`codinghelper {command}` failed: {message}")
        }
        FlowStop::Unsupported(command) => {
            writeln!(out, "Continue with `codinghelper {command}`.")
        }
    }
}
