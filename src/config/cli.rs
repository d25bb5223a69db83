use crate::core::Storage;
use crate::utils::error::{CommandsError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Filesystem storage rooted at `base_path`.
///
/// Writes go through a temp file in the target directory that is renamed over
/// the destination, so a failed write never leaves a partial output file.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|e| CommandsError::io(path, e))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let parent = full_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        fs::create_dir_all(parent).map_err(|e| CommandsError::io(path, e))?;

        let mut staged = NamedTempFile::new_in(parent).map_err(|e| CommandsError::io(path, e))?;
        staged
            .write_all(data)
            .map_err(|e| CommandsError::io(path, e))?;
        staged
            .as_file()
            .sync_all()
            .map_err(|e| CommandsError::io(path, e))?;
        staged
            .persist(&full_path)
            .map_err(|e| CommandsError::io(path, e.error))?;

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}
