//! Workflow domain: ordered phases, the phase gate, and step sequencing.

mod flow;
mod gate;
mod phase;

pub use flow::{FlowStep, WorkflowCommand, next_step};
pub use gate::{PhaseViolation, assert_min_phase};
pub use phase::{ParsePhaseError, Phase};
