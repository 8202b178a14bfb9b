//! File-backed storage for native builds
//!
//! Each key maps to `<dir>/<key>.json`. Writes go through a temp file in the
//! same directory and are renamed into place, so a crash mid-write leaves the
//! previous snapshot intact.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::storage::Store;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that holds the value for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let mut temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }
}
