//! Workflow phases and the step loop that advances between them.
//!
//! - Phase ordering and the phase gate in [`domain`]
//! - The iterative flow runner and its collaborator traits in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
