//! Finds the project root by walking up from a start directory.

use camino::{Utf8Path, Utf8PathBuf};

use crate::project::{domain::layout, ports::ProjectStoreError};
use crate::storage::ProjectDir;

/// Returns the nearest ancestor of `start` (inclusive) that contains a
/// `.codinghelper/` directory.
///
/// # Errors
///
/// Returns [`ProjectStoreError::NotInitialized`] when no ancestor has one.
pub fn locate_project_root(start: &Utf8Path) -> Result<Utf8PathBuf, ProjectStoreError> {
    start
        .ancestors()
        .find(|candidate| candidate.join(layout::STATE_DIR).is_dir())
        .map(Utf8Path::to_path_buf)
        .ok_or(ProjectStoreError::NotInitialized)
}

/// Opens the state directory of the project rooted at `root`.
///
/// # Errors
///
/// Returns [`ProjectStoreError::NotInitialized`] when `root` has no state
/// directory and [`ProjectStoreError::Persistence`] when it cannot be opened.
pub fn open_state_dir(root: &Utf8Path) -> Result<ProjectDir, ProjectStoreError> {
    ProjectDir::open(&root.join(layout::STATE_DIR)).map_err(|err| match err {
        crate::storage::StorageError::NotFound(_) => ProjectStoreError::NotInitialized,
        other => ProjectStoreError::persistence(other),
    })
}
