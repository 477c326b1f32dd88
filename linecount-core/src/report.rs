//! Report formatting utilities for scan results.

use std::fmt::Write as _;
use std::io;

use crate::domain::ScanResult;

const SEPARATOR: &str = "===============";

/// Render the plain-text report: one `path \t count` line per file, a
/// separator, then the file count, total and average.
pub fn render_text(result: &ScanResult) -> String {
    let mut output = String::new();
    for record in result.records() {
        let _ = writeln!(output, "{} \t {}", record.path.display(), record.lines);
    }
    let summary = result.summary();
    let _ = writeln!(output, "{SEPARATOR}");
    let _ = writeln!(output, "Number of files found: \t {}", summary.file_count);
    let _ = writeln!(output, "Total number of lines: \t {}", summary.total_lines);
    let _ = writeln!(output, "Average lines per file: \t {}", summary.average);
    output
}

/// Render the scan result as Markdown.
pub fn render_markdown(result: &ScanResult) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Line Count Report\n");
    if result.is_empty() {
        let _ = writeln!(output, "No matching files found.\n");
    } else {
        let _ = writeln!(output, "| File | Lines |");
        let _ = writeln!(output, "| --- | ---: |");
        for record in result.records() {
            let _ = writeln!(output, "| `{}` | {} |", record.path.display(), record.lines);
        }
        let _ = writeln!(output);
    }
    let summary = result.summary();
    let _ = writeln!(output, "### Summary");
    let _ = writeln!(output, "- Files: {}", summary.file_count);
    let _ = writeln!(output, "- Total lines: {}", summary.total_lines);
    let _ = writeln!(output, "- Average lines per file: {}", summary.average);
    output
}

/// Render the scan result as pretty-printed JSON.
pub fn render_json(result: &ScanResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Write the plain-text report to `sink`.
pub fn write_report<W: io::Write + ?Sized>(result: &ScanResult, sink: &mut W) -> io::Result<()> {
    sink.write_all(render_text(result).as_bytes())?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileRecord;
    use std::path::PathBuf;

    fn csv_result() -> ScanResult {
        ScanResult::from_records(vec![
            FileRecord::new(PathBuf::from("files/4_lines.csv"), 4),
            FileRecord::new(PathBuf::from("files/sub/100_lines.csv"), 100),
            FileRecord::new(PathBuf::from("files/sub/20_lines.csv"), 20),
        ])
    }

    #[test]
    fn renders_text_report() {
        let output = render_text(&csv_result());
        assert_eq!(
            output,
            "files/4_lines.csv \t 4\n\
             files/sub/100_lines.csv \t 100\n\
             files/sub/20_lines.csv \t 20\n\
             ===============\n\
             Number of files found: \t 3\n\
             Total number of lines: \t 124\n\
             Average lines per file: \t 41.33\n"
        );
    }

    #[test]
    fn renders_empty_text_report() {
        let output = render_text(&ScanResult::empty());
        assert!(output.starts_with("===============\n"));
        assert!(output.ends_with("Average lines per file: \t 0 files found.\n"));
    }

    #[test]
    fn renders_markdown_report() {
        let output = render_markdown(&csv_result());
        assert!(output.contains("# Line Count Report"));
        assert!(output.contains("| `files/sub/100_lines.csv` | 100 |"));
        assert!(output.contains("- Total lines: 124"));

        let empty = render_markdown(&ScanResult::empty());
        assert!(empty.contains("No matching files found."));
        assert!(empty.contains("- Average lines per file: 0 files found."));
    }

    #[test]
    fn renders_json_payload() {
        let json = render_json(&csv_result()).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed["records"][1]["lines"], 100);
        assert_eq!(parsed["summary"]["totalLines"], 124);
        assert_eq!(parsed["summary"]["average"]["status"], "per_file");
        assert_eq!(parsed["summary"]["average"]["value"], 41.33);

        let empty: serde_json::Value =
            serde_json::from_str(&render_json(&ScanResult::empty()).expect("json")).expect("parse");
        assert_eq!(empty["summary"]["average"]["status"], "no_files");
    }

    #[test]
    fn writes_report_to_sink() {
        let result = csv_result();
        let mut sink = Vec::new();
        write_report(&result, &mut sink).expect("write");
        assert_eq!(String::from_utf8(sink).expect("utf8"), render_text(&result));
    }
}
