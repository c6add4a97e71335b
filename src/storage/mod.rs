//! File Manager: the storage abstraction the command handlers use to read,
//! write, and inspect the served tree. One implementation ships with this
//! crate ([`filesystem::FilesystemManager`]), backed directly by
//! `tokio::fs` with no confinement or canonicalization — the `path` module's
//! resolver is already the only boundary this server applies.

pub mod filesystem;

use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use tokio::io::AsyncRead;

/// Whether a path names a directory or a regular file, plus the facts
/// `LIST`/`SIZE` need to describe it.
#[derive(Debug, Clone)]
pub struct Stat {
    /// True for a directory, false for a regular file.
    pub is_dir: bool,
    /// Size in bytes. Meaningless (and ignored) for directories.
    pub size: u64,
    /// Last modification time.
    pub mtime: SystemTime,
    /// Rendered 10-character permission string (`drwxr-xr-x` for a
    /// directory, `-rw-r--r--` for a regular file), leading type character
    /// included.
    pub mode_string: String,
    /// Owning user id.
    pub uid: u32,
    /// Owning group id.
    pub gid: u32,
}

/// One entry returned by [`FileManager::list`]: a name paired with its
/// [`Stat`].
#[derive(Debug, Clone)]
pub struct Entry {
    /// The entry's bare file name, not a full path.
    pub name: String,
    /// The entry's metadata.
    pub stat: Stat,
}

/// Failure performing a storage operation against a specific path.
#[derive(Debug, thiserror::Error)]
#[error("file manager error for {path}: {source}")]
pub struct FileManagerError {
    /// The path the operation was attempted against.
    pub path: String,
    #[source]
    pub source: io::Error,
}

impl FileManagerError {
    pub(crate) fn new(path: &Path, source: io::Error) -> Self {
        FileManagerError {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Storage back-end contract: everything the Command Task Set needs to
/// serve `LIST`, `RETR`, `STOR`, `DELE`, `RMD`, `RNFR`/`RNTO`, and `SIZE`.
#[async_trait]
pub trait FileManager: Send + Sync {
    /// Metadata for a single path.
    async fn stat(&self, path: &str) -> Result<Stat, FileManagerError>;

    /// Directory contents, in no particular order.
    async fn list(&self, path: &str) -> Result<Vec<Entry>, FileManagerError>;

    /// Opens `path` for reading.
    async fn get(&self, path: &str) -> Result<Box<dyn AsyncRead + Send + Unpin>, FileManagerError>;

    /// Creates (or truncates) `path` and copies `reader` into it.
    async fn put(&self, path: &str, reader: &mut (dyn AsyncRead + Send + Unpin)) -> Result<u64, FileManagerError>;

    /// Removes a single file. Must not remove directories.
    async fn remove(&self, path: &str) -> Result<(), FileManagerError>;

    /// Removes an empty directory.
    async fn remove_dir(&self, path: &str) -> Result<(), FileManagerError>;

    /// Renames `from` to `to`.
    async fn rename(&self, from: &str, to: &str) -> Result<(), FileManagerError>;
}

fn _assert_object_safe(_: &dyn FileManager) {}
