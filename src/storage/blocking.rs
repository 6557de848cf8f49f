//! Offloads synchronous filesystem work from the async executor.

use super::{StorageError, StorageResult};

/// Runs a blocking filesystem operation on tokio's blocking thread pool.
///
/// # Errors
///
/// Returns the closure's own error, or [`StorageError::Join`] when the worker
/// thread fails before producing a result.
pub async fn run_blocking<F, T>(f: F) -> StorageResult<T>
where
    F: FnOnce() -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| StorageError::Join(err.to_string()))?
}
