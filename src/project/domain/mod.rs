//! Project configuration and on-disk layout.

mod config;
pub mod layout;

pub use config::{ProjectConfig, TechStack};
