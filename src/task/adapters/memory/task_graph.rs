//! In-memory repository for task graph tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TaskGraph,
    ports::{TaskGraphRepository, TaskGraphRepositoryError, TaskGraphRepositoryResult},
};

/// Thread-safe in-memory task graph repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskGraphRepository {
    state: Arc<RwLock<Option<TaskGraph>>>,
}

impl InMemoryTaskGraphRepository {
    /// Creates an empty repository; `load` fails until a graph is saved.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `graph`.
    #[must_use]
    pub fn with_graph(graph: TaskGraph) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(graph))),
        }
    }
}

#[async_trait]
impl TaskGraphRepository for InMemoryTaskGraphRepository {
    async fn load(&self) -> TaskGraphRepositoryResult<TaskGraph> {
        let state = self.state.read().map_err(|err| {
            TaskGraphRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.clone().ok_or(TaskGraphRepositoryError::NotFound)
    }

    async fn save(&self, graph: &TaskGraph) -> TaskGraphRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskGraphRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *state = Some(graph.clone());
        Ok(())
    }
}
