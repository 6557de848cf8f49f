//! File-backed project store and project root discovery.

mod locate;
mod store;

pub use locate::{locate_project_root, open_state_dir};
pub use store::FsProjectStore;
