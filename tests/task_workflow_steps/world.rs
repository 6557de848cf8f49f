//! Shared world state for task workflow BDD scenarios.

use std::sync::Arc;

use codinghelper::commands::{CommandContext, CommandError};
use codinghelper::history::adapters::memory::{InMemoryHistoryRepository, InMemoryLogFileStore};
use codinghelper::project::{adapters::memory::InMemoryProjectStore, domain::ProjectConfig};
use codinghelper::task::adapters::memory::InMemoryTaskGraphRepository;
use codinghelper::workflow::domain::Phase;
use mockable::{Clock, DefaultClock};
use rstest::fixture;

/// Command context type used by the BDD world.
pub type TestContext = CommandContext<
    InMemoryProjectStore,
    InMemoryTaskGraphRepository,
    InMemoryHistoryRepository,
    InMemoryLogFileStore,
    DefaultClock,
>;

/// Scenario world for task workflow behaviour tests.
pub struct TaskWorkflowWorld {
    pub phase: Phase,
    pub requirements: String,
    pub project: Option<Arc<InMemoryProjectStore>>,
    pub tasks: Arc<InMemoryTaskGraphRepository>,
    pub history: Arc<InMemoryHistoryRepository>,
    pub logs: Arc<InMemoryLogFileStore>,
    pub last_error: Option<CommandError>,
}

impl TaskWorkflowWorld {
    /// Creates a world for a freshly initialised project.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            requirements: String::new(),
            project: None,
            tasks: Arc::new(InMemoryTaskGraphRepository::new()),
            history: Arc::new(InMemoryHistoryRepository::new()),
            logs: Arc::new(InMemoryLogFileStore::new()),
            last_error: None,
        }
    }

    /// Returns the project store, creating it from the given steps on first
    /// use.
    pub fn project(&mut self) -> Arc<InMemoryProjectStore> {
        let phase = self.phase;
        let requirements = self.requirements.clone();
        let project = self.project.get_or_insert_with(|| {
            let config = ProjectConfig::new("bdd", DefaultClock.utc()).with_phase(phase);
            Arc::new(
                InMemoryProjectStore::new(config)
                    .with_requirements(requirements)
                    .with_spec("# Spec"),
            )
        });
        Arc::clone(project)
    }

    /// Builds a command context over the world's adapters.
    pub fn context(&mut self) -> TestContext {
        CommandContext::new(
            self.project(),
            Arc::clone(&self.tasks),
            Arc::clone(&self.history),
            Arc::clone(&self.logs),
            Arc::new(DefaultClock),
        )
    }

    /// Stores the error of a command expected to be refused.
    pub fn record<T>(&mut self, result: Result<T, CommandError>) {
        if let Err(err) = result {
            self.last_error = Some(err);
        }
    }
}

impl Default for TaskWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorkflowWorld {
    TaskWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
