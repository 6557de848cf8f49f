//! Services driving the guided workflow.

mod runner;

pub use runner::{AdvancePrompt, FlowReport, FlowRunner, FlowStop, StepExecutor, StepResult};

#[cfg(test)]
pub(crate) use runner::{MockAdvancePrompt, MockStepExecutor};
