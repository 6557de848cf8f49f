//! Wires command handlers to the file-backed adapters.

use super::{CommandContext, CommandResult};
use crate::history::adapters::fs::{FsHistoryRepository, FsLogFileStore};
use crate::project::adapters::fs::{FsProjectStore, locate_project_root, open_state_dir};
use crate::task::adapters::fs::FsTaskGraphRepository;
use camino::{Utf8Path, Utf8PathBuf};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Command context backed by a project's `.codinghelper/` directory.
pub type FsCommandContext<C> =
    CommandContext<FsProjectStore, FsTaskGraphRepository, FsHistoryRepository, FsLogFileStore, C>;

/// Locates the project enclosing `start` and opens its state directory.
///
/// Returns the project root alongside the context.
///
/// # Errors
///
/// Returns [`super::CommandError::Project`] when no ancestor of `start` holds
/// a state directory or it cannot be opened.
pub fn open_project<C>(
    start: &Utf8Path,
    clock: Arc<C>,
) -> CommandResult<(Utf8PathBuf, FsCommandContext<C>)>
where
    C: Clock + Send + Sync,
{
    let root = locate_project_root(start)?;
    let dir = open_state_dir(&root)?;
    debug!(root = %root, "opened project state directory");

    let context = CommandContext::new(
        Arc::new(FsProjectStore::new(dir.clone())),
        Arc::new(FsTaskGraphRepository::new(dir.clone())),
        Arc::new(FsHistoryRepository::new(dir.clone())),
        Arc::new(FsLogFileStore::new(dir)),
        clock,
    );
    Ok((root, context))
}
