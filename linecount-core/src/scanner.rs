//! Directory scanning and line-count aggregation.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::counter::count_lines_with;
use crate::domain::{FileRecord, ScanResult};
use crate::error::Result;
use crate::fs::{FileSystem, StdFileSystem};
use crate::report::write_report;

/// Extension used when the caller does not provide one.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Scan `root` on the local filesystem and print the report to stdout.
///
/// A missing root or a tree without matching files yields an empty result.
/// A file that cannot be read once found aborts the whole scan.
pub fn scan(root: impl AsRef<Path>, extension: &str) -> Result<ScanResult> {
    let scanner = Scanner::new(StdFileSystem::new());
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    scanner.scan_with_report(root.as_ref(), extension, &mut handle)
}

/// Walks a directory tree and counts lines in files matching an extension.
pub struct Scanner<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> Scanner<F> {
    /// Create a scanner over the given filesystem.
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Lazily count matching files under `root`.
    ///
    /// The tree is enumerated up front; each file is read only when the
    /// iterator reaches it.
    pub fn records(&self, root: &Path, extension: &str) -> Result<Records<'_, F>> {
        let paths: Vec<PathBuf> = self
            .fs
            .list_files(root)?
            .into_iter()
            .filter(|path| matches_extension(path, extension))
            .collect();
        debug!(
            "found {} file(s) ending with {extension} under {}",
            paths.len(),
            root.display()
        );
        Ok(Records {
            fs: &self.fs,
            paths: paths.into_iter(),
        })
    }

    /// Count every matching file under `root` and aggregate the results.
    pub fn scan(&self, root: &Path, extension: &str) -> Result<ScanResult> {
        let records = self
            .records(root, extension)?
            .collect::<Result<Vec<FileRecord>>>()?;
        let result = ScanResult::from_records(records);
        let summary = result.summary();
        info!(
            "scanned {}: {} file(s), {} line(s), average {}",
            root.display(),
            summary.file_count,
            summary.total_lines,
            summary.average
        );
        Ok(result)
    }

    /// Scan `root` and write the text report to `sink`.
    pub fn scan_with_report<W: Write + ?Sized>(
        &self,
        root: &Path,
        extension: &str,
        sink: &mut W,
    ) -> Result<ScanResult> {
        let result = self.scan(root, extension)?;
        write_report(&result, sink)?;
        Ok(result)
    }
}

/// Iterator over counted files, produced by [`Scanner::records`].
pub struct Records<'a, F: FileSystem> {
    fs: &'a F,
    paths: std::vec::IntoIter<PathBuf>,
}

impl<F: FileSystem> Iterator for Records<'_, F> {
    type Item = Result<FileRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        let counted = count_lines_with(self.fs, &path);
        Some(counted.map(|lines| {
            debug!("{}: {lines} line(s)", path.display());
            FileRecord::new(path, lines)
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

fn matches_extension(path: &Path, extension: &str) -> bool {
    path.to_string_lossy().ends_with(extension)
}
