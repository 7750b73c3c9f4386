//! Banner compositor
//!
//! Maps each byte of each input line to a glyph block and composes the
//! glyph rows horizontally. Composition is pure; where the rows end up is
//! decided by the [`RowTarget`] it drives:
//!
//! ```text
//! input ─split─▶ lines ─compose_row(1..=8)─▶ RowTarget
//!                                              ├─ TextAccumulator (memory)
//!                                              └─ FileSink        (append)
//! ```

pub mod sink;

use crate::constants::{ESCAPED_LINE_BREAK, GLYPH_BLOCK_HEIGHT};
use crate::error::Result;
use crate::font::GlyphTable;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use sink::{truncate_output, FileSink, TextAccumulator};

/// Flag naming the file sink
pub const OUTPUT_FLAG: &str = "output";

/// Receives composed rows in order
pub trait RowTarget {
    /// A non-empty composed row. `last` is set only for the final row of
    /// the final input line.
    fn emit_row(&mut self, row: &str, last: bool) -> Result<()>;

    /// Blank line standing in for an empty input line
    fn emit_blank(&mut self) -> Result<()>;
}

/// Output routing derived from the caller's flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// File sink name relative to the output root; `None` renders in memory
    pub output: Option<String>,
}

impl RenderConfig {
    /// Build from a flags mapping. Only `output` is interpreted; an empty
    /// value means in-memory mode.
    pub fn from_flags(flags: &HashMap<String, String>) -> Self {
        let output = flags
            .get(OUTPUT_FLAG)
            .filter(|v| !v.is_empty())
            .cloned();
        Self { output }
    }

    pub fn to_file(name: impl Into<String>) -> Self {
        Self {
            output: Some(name.into()),
        }
    }
}

/// Result of a render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedOutput {
    /// Composed banner text (in-memory mode)
    Text(String),
    /// Rows appended to a file sink
    Written { path: PathBuf, rows: usize },
}

impl RenderedOutput {
    /// Composed text, or an empty string when rows went to a file
    pub fn into_text(self) -> String {
        match self {
            RenderedOutput::Text(text) => text,
            RenderedOutput::Written { .. } => String::new(),
        }
    }
}

/// Split caller input into logical lines.
///
/// Real `\r\n`, real `\n` and the escaped two-character `\n` all separate
/// lines. Input without a break yields exactly one line.
pub fn split_input_lines(input: &str) -> Vec<String> {
    input
        .replace("\r\n", ESCAPED_LINE_BREAK)
        .replace('\n', ESCAPED_LINE_BREAK)
        .split(ESCAPED_LINE_BREAK)
        .map(str::to_owned)
        .collect()
}

/// Compose rendering row `row` (1-based) for one input line.
///
/// Bytes without a glyph line in the table contribute nothing; the
/// fragments of their neighbours are concatenated directly.
pub fn compose_row(table: &GlyphTable, line: &str, row: usize) -> String {
    let mut buf = String::new();
    for code in line.bytes() {
        if let Some(segment) = table.glyph_row(code, row) {
            buf.push_str(segment);
        }
    }
    buf
}

/// Compose every row of `input` into `target`, in line then row order.
pub fn compose<T: RowTarget>(input: &str, table: &GlyphTable, target: &mut T) -> Result<()> {
    let lines = split_input_lines(input);
    let last_line = lines.len().saturating_sub(1);

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            target.emit_blank()?;
            continue;
        }
        for row in 1..=GLYPH_BLOCK_HEIGHT {
            let composed = compose_row(table, line, row);
            if !composed.is_empty() {
                target.emit_row(&composed, i == last_line && row == GLYPH_BLOCK_HEIGHT)?;
            }
        }
    }
    Ok(())
}

/// Render `input` with `table`, routed by `config`.
///
/// In file mode every row is appended to `output_dir/<output>` and
/// nothing is accumulated in memory.
pub fn render(
    input: &str,
    table: &GlyphTable,
    config: &RenderConfig,
    output_dir: &Path,
) -> Result<RenderedOutput> {
    match &config.output {
        Some(name) => {
            let mut sink = FileSink::new(output_dir, name);
            compose(input, table, &mut sink)?;
            debug!(
                "Rendered {} rows to {}",
                sink.rows_written(),
                sink.path().display()
            );
            Ok(RenderedOutput::Written {
                path: sink.path().to_path_buf(),
                rows: sink.rows_written(),
            })
        }
        None => {
            let mut acc = TextAccumulator::default();
            compose(input, table, &mut acc)?;
            debug!("Rendered {} bytes in memory", acc.as_str().len());
            Ok(RenderedOutput::Text(acc.into_string()))
        }
    }
}
