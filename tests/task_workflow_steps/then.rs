//! Then steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use codinghelper::commands::CommandError;
use codinghelper::history::{domain::HistoryAction, ports::HistoryRepository};
use codinghelper::project::ports::ProjectStore;
use codinghelper::task::{
    domain::{TaskGraph, TaskId, TaskStatus},
    ports::TaskGraphRepository,
};
use codinghelper::workflow::domain::{Phase, PhaseViolation};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn stored_graph(world: &TaskWorkflowWorld) -> Result<TaskGraph, eyre::Report> {
    run_async(world.tasks.load()).wrap_err("load stored task graph")
}

fn task_id(raw: String) -> Result<TaskId, eyre::Report> {
    TaskId::new(raw).map_err(|err| eyre::eyre!("invalid task id in scenario: {err}"))
}

#[then(r#"the project phase is "{phase}""#)]
fn project_phase_is(world: &mut TaskWorkflowWorld, phase: String) -> Result<(), eyre::Report> {
    let expected = Phase::try_from(phase.as_str())
        .map_err(|err| eyre::eyre!("invalid phase in scenario: {err}"))?;
    let project = world.project();
    let config = run_async(project.load_config()).wrap_err("load project config")?;
    if config.current_phase() != expected {
        return Err(eyre::eyre!(
            "expected phase {expected}, found {}",
            config.current_phase()
        ));
    }
    Ok(())
}

#[then("{count:usize} tasks are stored")]
fn tasks_are_stored(world: &TaskWorkflowWorld, count: usize) -> Result<(), eyre::Report> {
    let graph = stored_graph(world)?;
    if graph.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", graph.len()));
    }
    Ok(())
}

#[then(r#"task "{task}" depends on "{dependency}""#)]
fn task_depends_on(
    world: &TaskWorkflowWorld,
    task: String,
    dependency: String,
) -> Result<(), eyre::Report> {
    let id = task_id(task)?;
    let expected = vec![task_id(dependency)?];
    let graph = stored_graph(world)?;
    let found = graph
        .find_task(&id)
        .ok_or_else(|| eyre::eyre!("task {id} not stored"))?;
    if found.dependencies() != expected.as_slice() {
        return Err(eyre::eyre!(
            "expected {id} to depend on {expected:?}, found {:?}",
            found.dependencies()
        ));
    }
    Ok(())
}

#[then(r#"task "{task}" is "{status}""#)]
fn task_has_status(
    world: &TaskWorkflowWorld,
    task: String,
    status: String,
) -> Result<(), eyre::Report> {
    let id = task_id(task)?;
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let graph = stored_graph(world)?;
    let found = graph
        .find_task(&id)
        .ok_or_else(|| eyre::eyre!("task {id} not stored"))?;
    if found.status() != expected {
        return Err(eyre::eyre!(
            "expected {id} to be {expected}, found {}",
            found.status()
        ));
    }
    Ok(())
}

#[then(r#"the history records "{actions}""#)]
fn history_records(world: &TaskWorkflowWorld, actions: String) -> Result<(), eyre::Report> {
    let expected = actions
        .split(',')
        .map(|action| {
            HistoryAction::try_from(action.trim())
                .map_err(|err| eyre::eyre!("invalid action in scenario: {err}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let log = run_async(world.history.load_live()).wrap_err("load history")?;
    let recorded: Vec<HistoryAction> = log.entries().iter().map(|entry| entry.action()).collect();
    if recorded != expected {
        return Err(eyre::eyre!("expected history {expected:?}, found {recorded:?}"));
    }
    Ok(())
}

#[then(r#"the command is rejected because phase "{phase}" is required"#)]
fn rejected_for_phase(world: &TaskWorkflowWorld, phase: String) -> Result<(), eyre::Report> {
    let required = Phase::try_from(phase.as_str())
        .map_err(|err| eyre::eyre!("invalid phase in scenario: {err}"))?;
    match &world.last_error {
        Some(CommandError::Phase(PhaseViolation {
            required: actual, ..
        })) if *actual == required => Ok(()),
        other => Err(eyre::eyre!(
            "expected a phase violation requiring {required}, got {other:?}"
        )),
    }
}

#[then(r#"the command is rejected because "{task}" is already in progress"#)]
fn rejected_while_in_progress(
    world: &TaskWorkflowWorld,
    task: String,
) -> Result<(), eyre::Report> {
    let id = task_id(task)?;
    match &world.last_error {
        Some(CommandError::TaskAlreadyInProgress(active)) if *active == id => Ok(()),
        other => Err(eyre::eyre!(
            "expected {id} to block the start, got {other:?}"
        )),
    }
}
