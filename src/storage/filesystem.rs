//! A [`FileManager`] backed directly by the local filesystem via `tokio::fs`.
//! Paths are used exactly as given by the Path Resolver: no canonicalization,
//! no confinement to any root.

use super::{Entry, FileManager, FileManagerError, Stat};
use async_trait::async_trait;
use std::fmt::Write as _;
use std::path::Path;
use tokio::io::AsyncRead;

/// The crate's only storage back-end: `tokio::fs` operating directly on the
/// paths it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemManager;

fn stat_from_metadata(meta: &std::fs::Metadata) -> Stat {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};
    let mode = meta.permissions().mode();
    Stat {
        is_dir: meta.is_dir(),
        size: meta.len(),
        mtime: meta.modified().unwrap_or(std::time::UNIX_EPOCH),
        mode_string: mode_string(mode, meta.is_dir()),
        uid: meta.uid(),
        gid: meta.gid(),
    }
}

fn mode_string(mode: u32, is_dir: bool) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });
    for (shift, _) in [(6, 'u'), (3, 'g'), (0, 'o')] {
        let bits = (mode >> shift) & 0o7;
        let _ = write!(out, "{}", if bits & 0o4 != 0 { 'r' } else { '-' });
        let _ = write!(out, "{}", if bits & 0o2 != 0 { 'w' } else { '-' });
        let _ = write!(out, "{}", if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[async_trait]
impl FileManager for FilesystemManager {
    async fn stat(&self, path: &str) -> Result<Stat, FileManagerError> {
        let meta = tokio::fs::metadata(path).await.map_err(|e| FileManagerError::new(Path::new(path), e))?;
        Ok(stat_from_metadata(&meta))
    }

    async fn list(&self, path: &str) -> Result<Vec<Entry>, FileManagerError> {
        let mut read_dir = tokio::fs::read_dir(path).await.map_err(|e| FileManagerError::new(Path::new(path), e))?;
        let mut entries = Vec::new();
        loop {
            let next = read_dir.next_entry().await.map_err(|e| FileManagerError::new(Path::new(path), e))?;
            let Some(dir_entry) = next else { break };
            let meta = dir_entry.metadata().await.map_err(|e| FileManagerError::new(&dir_entry.path(), e))?;
            entries.push(Entry {
                name: dir_entry.file_name().to_string_lossy().into_owned(),
                stat: stat_from_metadata(&meta),
            });
        }
        Ok(entries)
    }

    async fn get(&self, path: &str) -> Result<Box<dyn AsyncRead + Send + Unpin>, FileManagerError> {
        let file = tokio::fs::File::open(path).await.map_err(|e| FileManagerError::new(Path::new(path), e))?;
        Ok(Box::new(file))
    }

    async fn put(&self, path: &str, reader: &mut (dyn AsyncRead + Send + Unpin)) -> Result<u64, FileManagerError> {
        let mut file = tokio::fs::File::create(path).await.map_err(|e| FileManagerError::new(Path::new(path), e))?;
        tokio::io::copy(reader, &mut file).await.map_err(|e| FileManagerError::new(Path::new(path), e))
    }

    async fn remove(&self, path: &str) -> Result<(), FileManagerError> {
        tokio::fs::remove_file(path).await.map_err(|e| FileManagerError::new(Path::new(path), e))
    }

    async fn remove_dir(&self, path: &str) -> Result<(), FileManagerError> {
        tokio::fs::remove_dir(path).await.map_err(|e| FileManagerError::new(Path::new(path), e))
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), FileManagerError> {
        tokio::fs::rename(from, to).await.map_err(|e| FileManagerError::new(Path::new(from), e))
    }
}
