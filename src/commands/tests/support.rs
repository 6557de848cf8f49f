//! Harness shared by the command tests.

use std::sync::Arc;

use crate::commands::{AutoApprove, CommandContext};
use crate::history::{
    adapters::memory::{InMemoryHistoryRepository, InMemoryLogFileStore},
    domain::HistoryAction,
    ports::HistoryRepository,
};
use crate::project::{
    adapters::memory::InMemoryProjectStore, domain::ProjectConfig, ports::ProjectStore,
};
use crate::task::{adapters::memory::InMemoryTaskGraphRepository, domain::TaskId};
use crate::test_support::FixedClock;
use crate::workflow::domain::Phase;

pub(super) const REQUIREMENTS: &str = "\
# Shop

## Catalogue
List products with prices.

## Basket
Shoppers collect items before paying.

## Checkout
Take payment and confirm the order.
";

pub(super) type TestContext = CommandContext<
    InMemoryProjectStore,
    InMemoryTaskGraphRepository,
    InMemoryHistoryRepository,
    InMemoryLogFileStore,
    FixedClock,
>;

pub(super) struct CommandHarness {
    pub(super) project: Arc<InMemoryProjectStore>,
    pub(super) tasks: Arc<InMemoryTaskGraphRepository>,
    pub(super) history: Arc<InMemoryHistoryRepository>,
    pub(super) logs: Arc<InMemoryLogFileStore>,
    pub(super) clock: Arc<FixedClock>,
}

impl CommandHarness {
    pub(super) fn at_phase(phase: Phase) -> Self {
        Self::with_logs(phase, InMemoryLogFileStore::new())
    }

    pub(super) fn with_logs(phase: Phase, logs: InMemoryLogFileStore) -> Self {
        let clock = Arc::new(FixedClock::at(2026, 9, 14, 9));
        let config = ProjectConfig::new("shop", clock.now()).with_phase(phase);
        Self {
            project: Arc::new(
                InMemoryProjectStore::new(config)
                    .with_requirements(REQUIREMENTS)
                    .with_spec("# Spec\nRust service."),
            ),
            tasks: Arc::new(InMemoryTaskGraphRepository::new()),
            history: Arc::new(InMemoryHistoryRepository::new()),
            logs: Arc::new(logs),
            clock,
        }
    }

    pub(super) fn context(&self) -> TestContext {
        CommandContext::new(
            Arc::clone(&self.project),
            Arc::clone(&self.tasks),
            Arc::clone(&self.history),
            Arc::clone(&self.logs),
            Arc::clone(&self.clock),
        )
    }

    /// Returns a context whose task index was already generated.
    pub(super) async fn planned(&self) -> TestContext {
        let context = self.context();
        context.task(&AutoApprove).await.expect("task list stored");
        context
    }

    pub(super) async fn phase(&self) -> Phase {
        self.project
            .load_config()
            .await
            .expect("config")
            .current_phase()
    }

    pub(super) async fn actions(&self) -> Vec<(String, HistoryAction)> {
        self.history
            .load_live()
            .await
            .expect("history")
            .entries()
            .iter()
            .map(|entry| (entry.task_id().to_string(), entry.action()))
            .collect()
    }
}

pub(super) fn id(n: usize) -> TaskId {
    TaskId::from_sequence(n)
}
