//! File-backed adapters storing the task index under `tasks/index.json`.

mod task_graph;

pub use task_graph::FsTaskGraphRepository;
