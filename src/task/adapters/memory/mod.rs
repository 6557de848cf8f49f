//! In-memory adapters for task lifecycle tests.

mod task_graph;

pub use task_graph::InMemoryTaskGraphRepository;
