//! Adapter implementations for the project store port.

pub mod fs;
pub mod memory;
