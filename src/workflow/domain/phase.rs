//! Ordered workflow phases.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A named stage of the project workflow.
///
/// Variants are declared in workflow order, so the derived ordering matches
/// [`Phase::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Project scaffolding created.
    Init,
    /// Requirements gathered.
    Plan,
    /// Technical spec written.
    Spec,
    /// Requirements split into tasks.
    Task,
    /// Tasks being executed.
    Run,
    /// Debugging after execution.
    Debug,
}

impl Phase {
    /// All phases in workflow order.
    pub const ALL: [Self; 6] = [
        Self::Init,
        Self::Plan,
        Self::Spec,
        Self::Task,
        Self::Run,
        Self::Debug,
    ];

    /// Returns the zero-based position of the phase in the workflow.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Init => 0,
            Self::Plan => 1,
            Self::Spec => 2,
            Self::Task => 3,
            Self::Run => 4,
            Self::Debug => 5,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Plan => "plan",
            Self::Spec => "spec",
            Self::Task => "task",
            Self::Run => "run",
            Self::Debug => "debug",
        }
    }

    /// Returns the later of `self` and `other`.
    ///
    /// Phases never move backwards; commands record progress through this.
    #[must_use]
    pub fn advanced_to(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Error returned when a phase name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown workflow phase: {0}")]
pub struct ParsePhaseError(pub String);

impl TryFrom<&str> for Phase {
    type Error = ParsePhaseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str() == normalized)
            .ok_or_else(|| ParsePhaseError(value.to_owned()))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
