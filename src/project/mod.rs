//! Project context: the `.codinghelper/` state directory and its config.
//!
//! - Directory layout and configuration types in [`domain`]
//! - The project store port in [`ports`]
//! - In-memory and file-backed stores in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
