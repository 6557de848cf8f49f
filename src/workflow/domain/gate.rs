//! Phase precondition checks for mutating commands.

use super::Phase;
use thiserror::Error;

/// A command was invoked before the project reached its required phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("current phase is `{current}` but this command requires `{required}` or later")]
pub struct PhaseViolation {
    /// Phase recorded in the project configuration.
    pub current: Phase,
    /// Minimum phase the command needs.
    pub required: Phase,
}

/// Fails iff `current` ranks below `required`.
///
/// # Errors
///
/// Returns [`PhaseViolation`] when the project has not reached `required`.
pub const fn assert_min_phase(current: Phase, required: Phase) -> Result<(), PhaseViolation> {
    if current.rank() < required.rank() {
        return Err(PhaseViolation { current, required });
    }
    Ok(())
}
