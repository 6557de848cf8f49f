//! Capability-scoped directory handle with JSON helpers.

use super::{StorageError, StorageResult};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use std::io::Write;
use std::sync::Arc;

/// Directory listing entry returned by [`ProjectDir::list_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name relative to the listed directory.
    pub name: String,
    /// Last modification time.
    pub modified: DateTime<Utc>,
    /// Whether the entry is a regular file.
    pub is_file: bool,
}

/// Handle to the project's state directory.
///
/// Cloning is cheap; clones share the same underlying directory descriptor.
#[derive(Debug, Clone)]
pub struct ProjectDir {
    dir: Arc<Dir>,
    location: Utf8PathBuf,
}

impl ProjectDir {
    /// Opens an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when the directory does not exist,
    /// or [`StorageError::Io`] when it cannot be opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| StorageError::io(path, err))?;
        Ok(Self {
            dir: Arc::new(dir),
            location: path.to_owned(),
        })
    }

    /// Opens a directory, creating it and any missing parents first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn create(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(|err| StorageError::io(path, err))?;
        Self::open(path)
    }

    /// Returns the path this handle was opened from.
    #[must_use]
    pub fn location(&self) -> &Utf8Path {
        &self.location
    }

    /// Returns whether `relative` exists below this directory.
    #[must_use]
    pub fn exists(&self, relative: &Utf8Path) -> bool {
        self.dir.exists(relative)
    }

    /// Reads a UTF-8 text file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for missing files and
    /// [`StorageError::Io`] for other read failures.
    pub fn read_string(&self, relative: &Utf8Path) -> StorageResult<String> {
        self.dir
            .read_to_string(relative)
            .map_err(|err| StorageError::io(relative, err))
    }

    /// Reads and deserialises a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for missing files and
    /// [`StorageError::Schema`] when the contents do not deserialise into `T`.
    pub fn read_json<T: DeserializeOwned>(&self, relative: &Utf8Path) -> StorageResult<T> {
        let contents = self.read_string(relative)?;
        serde_json::from_str(&contents).map_err(|err| StorageError::Schema {
            path: relative.to_owned(),
            message: err.to_string(),
        })
    }

    /// Reads a JSON file, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Schema`] or [`StorageError::Io`] for files that
    /// exist but cannot be read or deserialised.
    pub fn read_json_optional<T: DeserializeOwned>(
        &self,
        relative: &Utf8Path,
    ) -> StorageResult<Option<T>> {
        match self.read_json(relative) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Serialises `value` as pretty JSON and atomically replaces `relative`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Schema`] when serialisation fails and
    /// [`StorageError::Io`] when the write or rename fails.
    pub fn write_json<T: Serialize>(&self, relative: &Utf8Path, value: &T) -> StorageResult<()> {
        let mut contents =
            serde_json::to_string_pretty(value).map_err(|err| StorageError::Schema {
                path: relative.to_owned(),
                message: err.to_string(),
            })?;
        contents.push('\n');
        self.write_atomic(relative, contents.as_bytes())
    }

    /// Writes `contents` to a sibling temporary file, flushes it, then renames
    /// it over `relative`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when any step fails. The temporary file is
    /// removed on a best-effort basis when the rename fails.
    pub fn write_atomic(&self, relative: &Utf8Path, contents: &[u8]) -> StorageResult<()> {
        self.ensure_parent(relative)?;
        let temp = temp_sibling(relative)?;

        let mut file = self
            .dir
            .create(&temp)
            .map_err(|err| StorageError::io(&temp, err))?;
        file.write_all(contents)
            .and_then(|()| file.sync_all())
            .map_err(|err| StorageError::io(&temp, err))?;
        drop(file);

        if let Err(err) = self.dir.rename(&temp, &self.dir, relative) {
            if self.dir.remove_file(&temp).is_err() {
                tracing::debug!(path = %temp, "could not remove temporary file");
            }
            return Err(StorageError::io(relative, err));
        }
        Ok(())
    }

    /// Lists the entries of a subdirectory, sorted by name.
    ///
    /// A missing directory yields an empty listing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory or an entry's metadata
    /// cannot be read.
    pub fn list_files(&self, relative_dir: &Utf8Path) -> StorageResult<Vec<FileEntry>> {
        let entries = match self.dir.read_dir(relative_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::io(relative_dir, err)),
        };

        let mut listing = Vec::new();
        for item in entries {
            let entry = item.map_err(|err| StorageError::io(relative_dir, err))?;
            let name = entry
                .file_name()
                .map_err(|err| StorageError::io(relative_dir, err))?;
            let metadata = entry
                .metadata()
                .map_err(|err| StorageError::io(relative_dir.join(&name), err))?;
            let modified = metadata
                .modified()
                .map_err(|err| StorageError::io(relative_dir.join(&name), err))?
                .into_std();
            listing.push(FileEntry {
                name,
                modified: DateTime::<Utc>::from(modified),
                is_file: metadata.is_file(),
            });
        }
        listing.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(listing)
    }

    /// Moves `relative` into `target_dir`, keeping its file name.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the target directory cannot be
    /// created or the rename fails.
    pub fn move_into(&self, relative: &Utf8Path, target_dir: &Utf8Path) -> StorageResult<()> {
        let file_name = relative.file_name().ok_or_else(|| {
            StorageError::io(
                relative,
                std::io::Error::other("path must include a file name"),
            )
        })?;
        self.dir
            .create_dir_all(target_dir)
            .map_err(|err| StorageError::io(target_dir, err))?;
        self.dir
            .rename(relative, &self.dir, target_dir.join(file_name))
            .map_err(|err| StorageError::io(relative, err))
    }

    fn ensure_parent(&self, relative: &Utf8Path) -> StorageResult<()> {
        match relative.parent() {
            Some(parent) if !parent.as_str().is_empty() => self
                .dir
                .create_dir_all(parent)
                .map_err(|err| StorageError::io(parent, err)),
            _ => Ok(()),
        }
    }
}

fn temp_sibling(relative: &Utf8Path) -> StorageResult<Utf8PathBuf> {
    let file_name = relative.file_name().ok_or_else(|| {
        StorageError::io(
            relative,
            std::io::Error::other("path must include a file name"),
        )
    })?;
    Ok(relative.with_file_name(format!(".{file_name}.{}.tmp", std::process::id())))
}
