//! Codinghelper: task dependency and phase-state engine.
//!
//! This crate backs the `codinghelper` workflow CLI. It splits a requirements
//! document into dependency-ordered tasks, tracks which task is running,
//! records every transition in a bounded history ledger, and refuses
//! commands the project's recorded phase does not yet allow.
//!
//! # Architecture
//!
//! Each context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure scheduling and validation logic with no I/O
//! - **Ports**: Abstract trait interfaces for persisted state
//! - **Adapters**: In-memory and `.codinghelper/`-backed implementations
//!
//! # Modules
//!
//! - [`task`]: Requirements breakdown, dependency inference, and scheduling
//! - [`history`]: Transition ledger, compaction, and log retention
//! - [`project`]: Project discovery and configuration
//! - [`workflow`]: Phase ordering, gates, and the guided flow runner
//! - [`commands`]: Command handlers composing the contexts
//! - [`storage`]: Capability-scoped file helpers shared by the adapters

pub mod commands;
pub mod history;
pub mod project;
pub mod storage;
pub mod task;
pub mod workflow;

#[cfg(test)]
mod test_support;
