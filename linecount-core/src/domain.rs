//! Domain entities for linecount.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Line count of a single matching file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path of the file, joined onto the scanned root.
    pub path: PathBuf,
    /// Number of lines in the file.
    pub lines: usize,
}

impl FileRecord {
    /// Create a record for a counted file.
    pub fn new(path: PathBuf, lines: usize) -> Self {
        Self { path, lines }
    }
}

/// Average lines per file, or the explicit state of having no files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum AverageLines {
    /// No matching files were found.
    NoFiles,
    /// Mean lines per file, rounded to two decimal places.
    PerFile(f64),
}

impl AverageLines {
    /// Compute the average for `total_lines` spread over `file_count` files.
    ///
    /// Rounds half away from zero.
    pub fn from_totals(total_lines: usize, file_count: usize) -> Self {
        if file_count == 0 {
            return Self::NoFiles;
        }
        let mean = total_lines as f64 / file_count as f64;
        Self::PerFile((mean * 100.0).round() / 100.0)
    }

    /// The rounded average, if any files were found.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::NoFiles => None,
            Self::PerFile(value) => Some(*value),
        }
    }
}

impl fmt::Display for AverageLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFiles => write!(f, "0 files found."),
            Self::PerFile(value) if value.fract() == 0.0 => write!(f, "{value:.1}"),
            Self::PerFile(value) => write!(f, "{value}"),
        }
    }
}

/// Aggregate statistics over a scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    /// Number of matching files.
    pub file_count: usize,
    /// Sum of all line counts.
    pub total_lines: usize,
    /// Average lines per file.
    pub average: AverageLines,
}

/// Ordered file records with their aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    records: Vec<FileRecord>,
    summary: ScanSummary,
}

impl ScanResult {
    /// Build a result from records in discovery order.
    pub fn from_records(records: Vec<FileRecord>) -> Self {
        let file_count = records.len();
        let total_lines = records.iter().map(|record| record.lines).sum();
        let summary = ScanSummary {
            file_count,
            total_lines,
            average: AverageLines::from_totals(total_lines, file_count),
        };
        Self { records, summary }
    }

    /// An empty result with the "no files found" average.
    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    /// Records in discovery order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Aggregate statistics.
    pub fn summary(&self) -> &ScanSummary {
        &self.summary
    }

    /// Whether no matching files were found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the result, keeping only the records.
    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }
}
