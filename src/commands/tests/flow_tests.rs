//! Flow runner driving real command handlers.

use std::sync::Arc;

use super::support::{CommandHarness, id};
use crate::commands::{AutoApprove, CommandStepExecutor, MockTaskListApproval, RunOptions};
use crate::task::ports::TaskGraphRepository;
use crate::workflow::{
    domain::{Phase, WorkflowCommand},
    services::{FlowRunner, FlowStop, MockAdvancePrompt, StepExecutor},
};
use rstest::rstest;

fn accepting_prompt(times: usize) -> MockAdvancePrompt {
    let mut prompt = MockAdvancePrompt::new();
    prompt.expect_confirm().times(times).return_const(true);
    prompt
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn spec_chains_into_task_and_run() {
    let harness = CommandHarness::at_phase(Phase::Spec);
    let executor = CommandStepExecutor::new(Arc::new(harness.context()), Arc::new(AutoApprove));
    let runner = FlowRunner::new(Arc::new(executor), Arc::new(accepting_prompt(2)));

    let report = runner.advance_from(WorkflowCommand::Spec).await;

    assert_eq!(report.executed, [WorkflowCommand::Task, WorkflowCommand::Run]);
    assert_eq!(report.stop, FlowStop::StoppingPoint(WorkflowCommand::Run));
    let graph = harness.tasks.load().await.expect("stored graph");
    assert_eq!(
        graph.in_progress_task().map(|task| task.id().clone()),
        Some(id(1))
    );
    assert_eq!(harness.phase().await, Phase::Run);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn done_loops_back_to_run_while_work_is_pending() {
    let harness = CommandHarness::at_phase(Phase::Spec);
    let context = harness.planned().await;
    context
        .run(RunOptions::default())
        .await
        .expect("run should succeed");
    context.done().await.expect("done should succeed");
    let executor = CommandStepExecutor::new(Arc::new(context), Arc::new(AutoApprove));
    let runner = FlowRunner::new(Arc::new(executor), Arc::new(accepting_prompt(1)));

    let report = runner.advance_from(WorkflowCommand::Done).await;

    assert_eq!(report.executed, [WorkflowCommand::Run]);
    let graph = harness.tasks.load().await.expect("stored graph");
    assert_eq!(
        graph.in_progress_task().map(|task| task.id().clone()),
        Some(id(2))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denied_task_list_stops_the_flow_as_failed() {
    let harness = CommandHarness::at_phase(Phase::Spec);
    let mut approval = MockTaskListApproval::new();
    approval.expect_approve().times(1).return_const(false);
    let executor = CommandStepExecutor::new(Arc::new(harness.context()), Arc::new(approval));
    let runner = FlowRunner::new(Arc::new(executor), Arc::new(accepting_prompt(1)));

    let report = runner.advance_from(WorkflowCommand::Spec).await;

    assert!(report.executed.is_empty());
    assert!(matches!(
        report.stop,
        FlowStop::Failed {
            command: WorkflowCommand::Task,
            ..
        }
    ));
    assert_eq!(harness.phase().await, Phase::Spec);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn planning_steps_are_unsupported() {
    let harness = CommandHarness::at_phase(Phase::Init);
    let executor = CommandStepExecutor::new(Arc::new(harness.context()), Arc::new(AutoApprove));
    let runner = FlowRunner::new(Arc::new(executor), Arc::new(accepting_prompt(1)));

    let report = runner.advance_from(WorkflowCommand::Init).await;

    assert_eq!(report.stop, FlowStop::Unsupported(WorkflowCommand::Plan));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pending_count_is_none_without_task_index() {
    let harness = CommandHarness::at_phase(Phase::Task);
    let executor = CommandStepExecutor::new(Arc::new(harness.context()), Arc::new(AutoApprove));

    assert_eq!(executor.pending_task_count().await, None);
}
