//! Task breakdown and scheduling.
//!
//! Requirements documents are split into level-2 sections, each becoming a
//! task. Dependencies between tasks are inferred from shared keywords, an
//! execution order is derived with Kahn's algorithm, and the service layer
//! moves tasks through their lifecycle while recording every transition in
//! the history ledger. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
