//! Glyph table
//!
//! A font definition is a flat list of lines partitioned into 9-line blocks.
//! Block `n` holds the glyph for character code `32 + n`: one separator
//! line followed by `GLYPH_BLOCK_HEIGHT` rendering rows.

use crate::constants::{glyph_line_index, GLYPH_BLOCK_SIZE};

/// Immutable line table loaded from a font definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    lines: Vec<String>,
}

impl GlyphTable {
    /// Build a table from raw font text.
    ///
    /// Carriage returns are dropped so `\r\n` and `\n` sources split the
    /// same way. A trailing newline yields a trailing empty line, which
    /// still counts towards the table length.
    pub fn from_text(text: &str) -> Self {
        let cleaned = text.replace('\r', "");
        let lines = cleaned.split('\n').map(str::to_owned).collect();
        Self { lines }
    }

    /// Number of lines in the table
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of complete blocks covered by the table
    pub fn block_count(&self) -> usize {
        self.lines.len() / GLYPH_BLOCK_SIZE
    }

    /// Line at a signed absolute index, `None` when out of bounds
    #[inline]
    pub fn line(&self, index: i64) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// Rendering row `row` (1-based) of the glyph for byte `code`
    #[inline]
    pub fn glyph_row(&self, code: u8, row: usize) -> Option<&str> {
        self.line(glyph_line_index(code, row))
    }
}
