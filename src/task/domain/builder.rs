//! Builds a task graph from requirement and spec documents.

use super::{
    KeywordRules, Priority, Task, TaskDomainError, TaskGraph, TaskId, execution_order,
    parse_sections, resolve_dependencies,
};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Documents a task graph is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSplitInput<'a> {
    /// Requirements document; its level-2 sections become tasks.
    pub requirements: &'a str,
    /// Technical spec; context only, it never changes task identity.
    pub spec: &'a str,
}

/// Turns requirement sections into a scheduled [`TaskGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskGraphBuilder {
    rules: KeywordRules,
}

impl TaskGraphBuilder {
    /// Creates a builder using the default keyword rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the keyword rules used for dependency inference.
    #[must_use]
    pub fn with_rules(mut self, rules: KeywordRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the active keyword rules.
    #[must_use]
    pub const fn rules(&self) -> &KeywordRules {
        &self.rules
    }

    /// Builds the graph. Every task shares the `created_at` timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PriorityOverflow`] if the document has more
    /// sections than a priority can number.
    pub fn build(
        &self,
        input: TaskSplitInput<'_>,
        created_at: DateTime<Utc>,
    ) -> Result<TaskGraph, TaskDomainError> {
        let sections = parse_sections(input.requirements);
        let ids: Vec<TaskId> = (1..=sections.len()).map(TaskId::from_sequence).collect();

        let mut tasks = Vec::with_capacity(sections.len());
        for (position, (section, id)) in sections.iter().zip(&ids).enumerate() {
            let priority = Priority::from_position(position)?;
            tasks.push(Task::pending(
                id.clone(),
                section.title(),
                priority,
                created_at,
            ));
        }

        let dependencies = resolve_dependencies(&sections, &ids, &self.rules);
        for (task, resolved) in tasks.iter_mut().zip(dependencies) {
            task.set_dependencies(resolved);
        }

        let schedule = execution_order(&tasks);
        if !schedule.is_acyclic() {
            warn!(
                unresolved = ?schedule.unresolved(),
                "dependency cycle detected; execution order is best effort"
            );
        }
        Ok(TaskGraph::from_parts(tasks, schedule.into_order()))
    }
}
