//! Line counting for single files.

use std::path::Path;

use crate::error::Result;
use crate::fs::{FileSystem, StdFileSystem};

/// Count the lines of a file on disk.
///
/// Undecodable bytes are replaced rather than rejected, so any readable file
/// can be counted. Fails with [`crate::LineCountError::NotFound`] when the path
/// is missing or unreadable.
pub fn count_lines(path: impl AsRef<Path>) -> Result<usize> {
    count_lines_with(&StdFileSystem::new(), path.as_ref())
}

/// Count the lines of a file read through the given filesystem.
pub fn count_lines_with<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<usize> {
    let text = fs.read_to_string_lossy(path)?;
    Ok(count_text_lines(&text))
}

/// Count lines in text.
///
/// `\n`, `\r\n` and a lone `\r` each end one line. A non-empty segment after
/// the last line break counts as one more line.
pub fn count_text_lines(text: &str) -> usize {
    let mut lines = 0usize;
    let mut pending = false;
    let mut bytes = text.bytes().peekable();

    while let Some(byte) = bytes.next() {
        match byte {
            b'\n' => {
                lines += 1;
                pending = false;
            }
            b'\r' => {
                if bytes.peek() == Some(&b'\n') {
                    bytes.next();
                }
                lines += 1;
                pending = false;
            }
            _ => pending = true,
        }
    }

    lines + usize::from(pending)
}

#[cfg(test)]
mod tests {
    use super::{count_lines, count_lines_with, count_text_lines};
    use crate::error::LineCountError;
    use crate::fs::MockFileSystem;
    use std::path::Path;

    #[test]
    fn empty_text_has_no_lines() {
        assert_eq!(count_text_lines(""), 0);
    }

    #[test]
    fn bare_newlines_are_one_line_each() {
        assert_eq!(count_text_lines("\n\n\n"), 3);
    }

    #[test]
    fn trailing_segment_counts_once() {
        let text = "5_lines.txt\nRegular txt file\nLine 1, \n... \n5 Lines in total!";
        assert_eq!(count_text_lines(text), 5);
        assert_eq!(count_text_lines("a\nb\n"), 2);
        assert_eq!(count_text_lines("single"), 1);
    }

    #[test]
    fn carriage_returns_end_lines() {
        assert_eq!(count_text_lines("a\r\nb\r\n"), 2);
        assert_eq!(count_text_lines("a\rb\rc"), 3);
        assert_eq!(count_text_lines("\r\n\r\r\n"), 3);
    }

    #[test]
    fn replacement_characters_are_plain_content() {
        assert_eq!(count_text_lines("caf\u{FFFD}\n\u{FFFD}"), 2);
    }

    #[test]
    fn counts_through_filesystem() {
        let mut fs = MockFileSystem::new();
        fs.expect_read_to_string_lossy()
            .withf(|path| path == Path::new("data/4_lines.csv"))
            .returning(|_| Ok("0,1\n2,3\n4,5\n6,7\n".to_string()));

        let lines = count_lines_with(&fs, Path::new("data/4_lines.csv")).expect("count");

        assert_eq!(lines, 4);
    }

    #[test]
    fn counts_file_on_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("100_lines.csv");
        let contents: String = (0..100).map(|n| format!("{n}\r\n")).collect();
        std::fs::write(&path, contents).expect("write file");

        assert_eq!(count_lines(&path).expect("count"), 100);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nonexistent_file.txt");

        let error = count_lines(&missing).expect_err("missing file");

        assert!(matches!(error, LineCountError::NotFound(path) if path == missing));
    }
}
