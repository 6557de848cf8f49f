//! Command-line front end for the codinghelper workflow.
//!
//! Usage:
//!
//! ```text
//! codinghelper [--dir <PATH>] [--no-advance] <command>
//! ```
//!
//! Commands operate on the nearest ancestor of the start directory holding a
//! `.codinghelper/` state directory. Log verbosity follows the
//! `CODINGHELPER_LOG` filter (default `info`); logs go to stderr and command
//! output to stdout. Rejected commands exit with status 1.

mod prompt;
mod render;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use codinghelper::commands::{
    AutoApprove, CommandError, CommandStepExecutor, CompactOptions, FsCommandContext,
    ReviewOptions, RunOptions, open_project,
};
use codinghelper::history::domain::ReviewVerdict;
use codinghelper::task::domain::{TaskDomainError, TaskId};
use codinghelper::workflow::{domain::WorkflowCommand, services::FlowRunner};
use mockable::DefaultClock;
use prompt::{StdinApproval, StdinPrompt};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CODINGHELPER_LOG";

/// Task dependency and phase-state engine for guided development.
#[derive(Debug, Parser)]
#[command(name = "codinghelper", version)]
struct Cli {
    /// Directory to start searching for the project from.
    #[arg(long, value_name = "PATH", global = true)]
    dir: Option<PathBuf>,

    /// Do not offer to chain into the next workflow step.
    #[arg(long, global = true)]
    no_advance: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split the requirements into dependency-ordered tasks.
    Task {
        /// Store the task list without asking for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Start, resume, or preview the next runnable task.
    Run {
        /// Continue the task already in progress.
        #[arg(long, conflicts_with = "dry_run")]
        resume: bool,
        /// Show what would run without changing anything.
        #[arg(long)]
        dry_run: bool,
        /// With --dry-run, list every pending task in execution order.
        #[arg(long, requires = "dry_run")]
        all: bool,
    },
    /// Mark the task in progress as completed.
    Done,
    /// Review the current or last completed task.
    Review(ReviewArgs),
    /// Archive old history entries and stale log files.
    Compact {
        /// Number of recent history entries to keep live.
        #[arg(short, long, value_name = "N")]
        keep: Option<usize>,
        /// Archive log files older than this many days.
        #[arg(short, long, value_name = "DAYS")]
        days: Option<u32>,
    },
    /// Show the phase, task progress, and history counts.
    Status,
}

#[derive(Debug, Args)]
struct ReviewArgs {
    /// Approve the task.
    #[arg(short, long, conflicts_with = "reject")]
    approve: bool,
    /// Reject the task.
    #[arg(short, long)]
    reject: bool,
    /// Reviewer comment.
    #[arg(short, long)]
    comment: Option<String>,
    /// Task to review instead of the current one.
    #[arg(short, long, value_name = "TASK_ID", value_parser = parse_task_id)]
    task: Option<TaskId>,
}

impl ReviewArgs {
    fn into_options(self) -> ReviewOptions {
        let verdict = if self.approve {
            Some(ReviewVerdict::Approved)
        } else if self.reject {
            Some(ReviewVerdict::Rejected)
        } else {
            None
        };
        ReviewOptions {
            verdict,
            comment: self.comment,
            task: self.task,
        }
    }
}

fn parse_task_id(value: &str) -> Result<TaskId, TaskDomainError> {
    TaskId::new(value)
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("start directory is not valid UTF-8: {}", .0.display())]
    NonUtf8Dir(PathBuf),
}

impl CliError {
    const fn is_domain(&self) -> bool {
        match self {
            Self::Command(err) => err.is_domain(),
            Self::Io(_) => false,
            Self::NonUtf8Dir(_) => true,
        }
    }
}

type Context = FsCommandContext<DefaultClock>;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_domain() {
                warn!("{err}");
            } else {
                error!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let start_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let start = Utf8PathBuf::try_from(start_dir)
        .map_err(|err| CliError::NonUtf8Dir(err.into_path_buf()))?;
    let (_root, context) = open_project(&start, Arc::new(DefaultClock))?;
    let context = Arc::new(context);
    let interactive = !cli.no_advance && io::stdin().is_terminal();

    match cli.command {
        Command::Task { yes } => {
            let outcome = if yes {
                context.task(&AutoApprove).await?
            } else {
                context.task(&StdinApproval).await?
            };
            render::task(&mut io::stdout().lock(), &outcome)?;
            if interactive {
                advance(&context, WorkflowCommand::Task).await?;
            }
        }
        Command::Run {
            resume,
            dry_run,
            all,
        } => {
            let outcome = context
                .run(RunOptions {
                    resume,
                    dry_run,
                    all,
                })
                .await?;
            render::run(&mut io::stdout().lock(), &outcome)?;
        }
        Command::Done => {
            let outcome = context.done().await?;
            render::done(&mut io::stdout().lock(), &outcome)?;
            if interactive {
                advance(&context, WorkflowCommand::Done).await?;
            }
        }
        Command::Review(args) => {
            let outcome = context.review(args.into_options()).await?;
            render::review(&mut io::stdout().lock(), &outcome)?;
        }
        Command::Compact { keep, days } => {
            let outcome = context.compact(CompactOptions { keep, days }).await?;
            render::compact(&mut io::stdout().lock(), &outcome)?;
        }
        Command::Status => {
            let report = context.status().await?;
            render::status(&mut io::stdout().lock(), &report)?;
        }
    }
    Ok(())
}

async fn advance(context: &Arc<Context>, completed: WorkflowCommand) -> Result<(), CliError> {
    let executor = CommandStepExecutor::new(Arc::clone(context), Arc::new(StdinApproval));
    let runner = FlowRunner::new(Arc::new(executor), Arc::new(StdinPrompt));
    let report = runner.advance_from(completed).await;
    let active = context
        .task_service()
        .in_progress_task()
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, "could not load the active task after advancing");
            None
        });
    render::flow(&mut io::stdout().lock(), &report, active.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests;
