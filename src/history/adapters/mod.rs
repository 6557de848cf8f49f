//! Adapter implementations for history ports.

pub mod fs;
pub mod memory;
