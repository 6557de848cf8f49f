//! Terminal confirmations for task-list approval and flow advancement.

use codinghelper::commands::TaskListApproval;
use codinghelper::task::domain::TaskGraph;
use codinghelper::workflow::{domain::FlowStep, services::AdvancePrompt};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Shows the generated task list and asks before storing it.
pub(crate) struct StdinApproval;

impl TaskListApproval for StdinApproval {
    fn approve(&self, graph: &TaskGraph) -> bool {
        let shown = super::render::task_list(&mut io::stdout().lock(), graph.tasks());
        if let Err(err) = shown {
            warn!(error = %err, "could not display task list");
            return false;
        }
        confirm("Store this task list?", false)
    }
}

/// Asks before running the suggested follow-up step.
pub(crate) struct StdinPrompt;

impl AdvancePrompt for StdinPrompt {
    fn confirm(&self, step: &FlowStep) -> bool {
        confirm(
            &format!("Next: `codinghelper {}` to {}. Continue?", step.command, step.label),
            true,
        )
    }
}

fn confirm(question: &str, default: bool) -> bool {
    ask(question, default).unwrap_or_else(|err| {
        warn!(error = %err, "could not read answer");
        false
    })
}

fn ask(question: &str, default: bool) -> io::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let mut stdout = io::stdout().lock();
    write!(stdout, "{question} {hint} ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_answer(&line, default))
}

/// Interprets a yes/no answer; anything unrecognised is `default`.
pub(crate) fn parse_answer(line: &str, default: bool) -> bool {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}
