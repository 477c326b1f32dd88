#![deny(missing_docs)]
//! Linecount core library.
//!
//! Counts lines in single files and aggregates line counts across every file
//! under a directory tree whose path ends with a given extension.

pub mod counter;
pub mod domain;
pub mod error;
pub mod fs;
pub mod report;
pub mod scanner;

pub use counter::{count_lines, count_lines_with, count_text_lines};
pub use domain::{AverageLines, FileRecord, ScanResult, ScanSummary};
pub use error::{LineCountError, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use report::{render_json, render_markdown, render_text, write_report};
pub use scanner::{DEFAULT_EXTENSION, Records, Scanner, scan};
