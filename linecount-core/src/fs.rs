//! Filesystem abstractions used for scanning.

use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{LineCountError, Result};

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// List all regular files reachable from the root path, top-down.
    ///
    /// A root that does not exist or is not a directory yields no files.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
    /// Read a file as text, replacing invalid UTF-8 with U+FFFD.
    fn read_to_string_lossy(&self, path: &Path) -> Result<String>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if !root.is_dir() {
            return Ok(files);
        }
        let mut pending = vec![root.to_path_buf()];

        // Files of a directory come before anything found in its subdirectories.
        while let Some(dir) = pending.pop() {
            let entries = match std::fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("skipping unreadable directory {}: {err}", dir.display());
                    continue;
                }
            };
            let mut subdirs = Vec::new();
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!("skipping entry in {}: {err}", dir.display());
                        continue;
                    }
                };
                let path = entry.path();
                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(err) => {
                        warn!("skipping {}: {err}", path.display());
                        continue;
                    }
                };
                if file_type.is_dir() {
                    subdirs.push(path);
                } else if file_type.is_file() {
                    files.push(path);
                } else if file_type.is_symlink() && !path.is_dir() {
                    // Dangling links are listed so that reading them fails the scan.
                    files.push(path);
                }
            }
            pending.extend(subdirs.into_iter().rev());
        }

        Ok(files)
    }

    fn read_to_string_lossy(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|err| LineCountError::from_read(path, err))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
