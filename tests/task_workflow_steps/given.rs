//! Given steps for task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use codinghelper::commands::AutoApprove;
use codinghelper::workflow::domain::Phase;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a project in phase "{phase}""#)]
fn project_in_phase(world: &mut TaskWorkflowWorld, phase: String) -> Result<(), eyre::Report> {
    world.phase = Phase::try_from(phase.as_str())
        .map_err(|err| eyre::eyre!("invalid phase in scenario: {err}"))?;
    Ok(())
}

#[given(r#"requirements with sections "{titles}""#)]
fn requirements_with_sections(world: &mut TaskWorkflowWorld, titles: String) {
    world.requirements = titles
        .split(',')
        .map(str::trim)
        .map(|title| format!("## {title}\nImplement {title}.\n"))
        .collect::<Vec<_>>()
        .join("\n");
}

#[given("the task list has been generated")]
fn task_list_generated(world: &mut TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let context = world.context();
    run_async(context.task(&AutoApprove)).wrap_err("generate task list in scenario setup")?;
    Ok(())
}
