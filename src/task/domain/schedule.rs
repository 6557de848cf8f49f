//! Topological execution ordering (Kahn's algorithm).

use super::{Task, TaskId};
use std::collections::{HashMap, VecDeque};

/// Result of ordering a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    order: Vec<TaskId>,
    unresolved: Vec<TaskId>,
}

impl Schedule {
    /// Returns the full execution order, one entry per task.
    #[must_use]
    pub fn order(&self) -> &[TaskId] {
        &self.order
    }

    /// Returns the tasks that sit on or behind a dependency cycle.
    ///
    /// These were appended to [`Self::order`] in list order without honouring
    /// their edges.
    #[must_use]
    pub fn unresolved(&self) -> &[TaskId] {
        &self.unresolved
    }

    /// Returns whether every edge is respected by the order.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Consumes the schedule, returning the execution order.
    #[must_use]
    pub fn into_order(self) -> Vec<TaskId> {
        self.order
    }
}

/// Computes an execution order for `tasks`.
///
/// Dependencies on identifiers outside the list are ignored. Ties are broken
/// by list order, so the result is deterministic. A cycle never fails: tasks
/// that cannot be ordered are appended in list order and reported through
/// [`Schedule::unresolved`].
#[must_use]
pub fn execution_order(tasks: &[Task]) -> Schedule {
    let positions: HashMap<&TaskId, usize> = tasks
        .iter()
        .enumerate()
        .map(|(position, task)| (task.id(), position))
        .collect();

    let mut in_degree = vec![0_usize; tasks.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
    for (position, task) in tasks.iter().enumerate() {
        for dependency in task.dependencies() {
            let Some(&source) = positions.get(dependency) else {
                continue;
            };
            if let Some(edges) = dependents.get_mut(source) {
                edges.push(position);
            }
            if let Some(degree) = in_degree.get_mut(position) {
                *degree += 1;
            }
        }
    }

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(position, _)| position)
        .collect();
    let mut placed = vec![false; tasks.len()];
    let mut order = Vec::with_capacity(tasks.len());

    while let Some(current) = queue.pop_front() {
        if let (Some(task), Some(flag)) = (tasks.get(current), placed.get_mut(current)) {
            *flag = true;
            order.push(task.id().clone());
        }
        for &next in dependents.get(current).map_or(&[][..], Vec::as_slice) {
            if let Some(degree) = in_degree.get_mut(next).filter(|degree| **degree > 0) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(next);
                }
            }
        }
    }

    let unresolved: Vec<TaskId> = tasks
        .iter()
        .zip(&placed)
        .filter(|(_, was_placed)| !**was_placed)
        .map(|(task, _)| task.id().clone())
        .collect();
    order.extend(unresolved.iter().cloned());

    Schedule { order, unresolved }
}
