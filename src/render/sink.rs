//! Row targets
//!
//! `TextAccumulator` joins rows in memory; `FileSink` appends them to a
//! file under the output root.

use super::RowTarget;
use crate::error::{BannerError, Result};
use log::info;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// In-memory target: rows joined by `\n`, no break after the final row
#[derive(Debug, Default)]
pub struct TextAccumulator {
    text: String,
}

impl TextAccumulator {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl RowTarget for TextAccumulator {
    fn emit_row(&mut self, row: &str, last: bool) -> Result<()> {
        self.text.push_str(row);
        if !last {
            self.text.push('\n');
        }
        Ok(())
    }

    fn emit_blank(&mut self) -> Result<()> {
        self.text.push('\n');
        Ok(())
    }
}

/// Append-only file target.
///
/// The output directory and file are created on the first write, so a
/// render that emits nothing leaves the file system untouched. Existing
/// content is never truncated here; see [`truncate_output`].
#[derive(Debug)]
pub struct FileSink {
    output_dir: PathBuf,
    path: PathBuf,
    file: Option<File>,
    rows_written: usize,
}

impl FileSink {
    pub fn new(output_dir: &Path, name: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            path: output_dir.join(name),
            file: None,
            rows_written: 0,
        }
    }

    /// Destination file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines appended so far (rows and blanks)
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    fn open(&self) -> Result<File> {
        std::fs::create_dir_all(&self.output_dir).map_err(sink_err(&self.output_dir))?;
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(sink_err(&self.path))?;
        info!("Appending banner to {}", self.path.display());
        Ok(file)
    }

    fn file(&mut self) -> Result<&mut File> {
        let file = match self.file.take() {
            Some(file) => file,
            None => self.open()?,
        };
        Ok(self.file.insert(file))
    }

    /// Append one line in a single write
    fn append_line(&mut self, line: &str) -> Result<()> {
        let on_err = sink_err(&self.path);
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file()?.write_all(buf.as_bytes()).map_err(on_err)?;
        self.rows_written += 1;
        Ok(())
    }
}

impl RowTarget for FileSink {
    fn emit_row(&mut self, row: &str, _last: bool) -> Result<()> {
        self.append_line(row)
    }

    fn emit_blank(&mut self) -> Result<()> {
        self.append_line("")
    }
}

fn sink_err(path: &Path) -> impl FnOnce(std::io::Error) -> BannerError {
    let path = path.to_path_buf();
    move |source| BannerError::SinkIo { path, source }
}

/// Empty `output_dir/<name>` if it exists.
///
/// Returns whether a file was truncated; a missing file is not an error.
pub fn truncate_output(output_dir: &Path, name: &str) -> Result<bool> {
    let path = output_dir.join(name);
    if !path.is_file() {
        return Ok(false);
    }
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&path)
        .map_err(sink_err(&path))?;
    info!("Truncated {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_accumulator_final_row() {
        let mut acc = TextAccumulator::default();
        acc.emit_row("one", false).unwrap();
        acc.emit_blank().unwrap();
        acc.emit_row("two", true).unwrap();
        assert_eq!(acc.into_string(), "one\n\ntwo");
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("outputs");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("art.txt"), "existing\n").unwrap();

        let mut sink = FileSink::new(&out, "art.txt");
        sink.emit_row("one", false).unwrap();
        sink.emit_blank().unwrap();
        sink.emit_row("two", true).unwrap();

        assert_eq!(sink.rows_written(), 3);
        assert_eq!(
            fs::read_to_string(out.join("art.txt")).unwrap(),
            "existing\none\n\ntwo\n"
        );
    }

    #[test]
    fn test_file_sink_creates_dir_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("outputs");

        let mut sink = FileSink::new(&out, "art.txt");
        assert!(!out.exists());
        sink.emit_row("row", true).unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "row\n");
    }

    #[test]
    fn test_file_sink_dir_failure() {
        let dir = tempfile::tempdir().unwrap();
        // a file blocks directory creation
        let blocker = dir.path().join("outputs");
        fs::write(&blocker, "").unwrap();

        let mut sink = FileSink::new(&blocker, "art.txt");
        let err = sink.emit_row("row", true).unwrap_err();
        match err {
            BannerError::SinkIo { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_truncate_output() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!truncate_output(dir.path(), "art.txt").unwrap());

        fs::write(dir.path().join("art.txt"), "old\n").unwrap();
        assert!(truncate_output(dir.path(), "art.txt").unwrap());
        assert_eq!(fs::read_to_string(dir.path().join("art.txt")).unwrap(), "");
    }
}
