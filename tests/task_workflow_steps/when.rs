//! When steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use codinghelper::commands::{AutoApprove, ReviewOptions, RunOptions};
use codinghelper::history::domain::ReviewVerdict;
use codinghelper::task::domain::TaskId;
use rstest_bdd_macros::when;

#[when("the task list is generated")]
fn generate_task_list(world: &mut TaskWorkflowWorld) {
    let context = world.context();
    let result = run_async(context.task(&AutoApprove));
    world.record(result);
}

#[when("the next task is started")]
fn start_next_task(world: &mut TaskWorkflowWorld) {
    let context = world.context();
    let result = run_async(context.run(RunOptions::default()));
    world.record(result);
}

#[when("the current task is marked done")]
fn mark_current_done(world: &mut TaskWorkflowWorld) {
    let context = world.context();
    let result = run_async(context.done());
    world.record(result);
}

#[when(r#"task "{task_id}" is rejected with comment "{comment}""#)]
fn reject_task(
    world: &mut TaskWorkflowWorld,
    task_id: String,
    comment: String,
) -> Result<(), eyre::Report> {
    let task = TaskId::new(task_id).map_err(|err| eyre::eyre!("invalid task id: {err}"))?;
    let context = world.context();
    let result = run_async(context.review(ReviewOptions {
        verdict: Some(ReviewVerdict::Rejected),
        comment: Some(comment),
        task: Some(task),
    }));
    world.record(result);
    Ok(())
}
