//! Persisted "last sync version" bookkeeping.
//!
//! The library API hands back a version number with every response; storing
//! the last one seen lets the next run fetch only newer annotations. Loaded
//! once at start, written once at the end, and kept well away from the
//! converter core.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Result;

/// File-backed store for the last processed library version.
#[derive(Debug, Clone)]
pub struct SinceStore {
    path: PathBuf,
}

impl SinceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user's home directory.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".readwise-sync")
            .join("since")
    }

    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored version; 0 when the file does not exist yet or does
    /// not parse (a full sync is the safe fallback either way).
    pub fn read_version(&self) -> Result<u64> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err.into()),
        };
        match contents.trim().parse() {
            Ok(version) => Ok(version),
            Err(_) => {
                tracing::warn!(path = %self.path.display(), "unreadable sync version, starting from 0");
                Ok(0)
            }
        }
    }

    pub fn write_version(&self, version: u64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{version}\n"))?;
        Ok(())
    }
}
