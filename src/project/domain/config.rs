//! Persisted project configuration.

use crate::workflow::domain::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Technology choices recorded during planning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    /// Frontend framework.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
    /// Backend framework.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    /// Database engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// Contents of `config.json`. Unknown keys are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    project_name: String,
    current_phase: Phase,
    #[serde(default)]
    tech_stack: TechStack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl ProjectConfig {
    /// Creates a configuration for a freshly initialised project.
    #[must_use]
    pub fn new(project_name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            project_name: project_name.into(),
            current_phase: Phase::Init,
            tech_stack: TechStack::default(),
            created_at: Some(created_at),
        }
    }

    /// Sets the current phase without the monotonic check.
    ///
    /// Intended for reconstructing configurations in tests and migrations.
    #[must_use]
    pub const fn with_phase(mut self, phase: Phase) -> Self {
        self.current_phase = phase;
        self
    }

    /// Sets the tech stack.
    #[must_use]
    pub fn with_tech_stack(mut self, tech_stack: TechStack) -> Self {
        self.tech_stack = tech_stack;
        self
    }

    /// Returns the project name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the recorded phase.
    #[must_use]
    pub const fn current_phase(&self) -> Phase {
        self.current_phase
    }

    /// Returns the tech stack.
    #[must_use]
    pub const fn tech_stack(&self) -> &TechStack {
        &self.tech_stack
    }

    /// Returns the creation timestamp, when recorded.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Moves the phase forward to `phase`; earlier phases are ignored.
    ///
    /// Returns whether the phase changed.
    pub fn advance_to(&mut self, phase: Phase) -> bool {
        let advanced = self.current_phase.advanced_to(phase);
        let changed = advanced != self.current_phase;
        self.current_phase = advanced;
        changed
    }
}
