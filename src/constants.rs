//! Global constants for glyphbanner
//!
//! Glyph table geometry and the default locations used when no
//! configuration file overrides them.

// ============================================================================
// Glyph Table Geometry
// ============================================================================

/// Renderable rows per glyph
pub const GLYPH_BLOCK_HEIGHT: usize = 8;

/// Lines per block: one separator line followed by the renderable rows
pub const GLYPH_BLOCK_SIZE: usize = GLYPH_BLOCK_HEIGHT + 1;

/// Character code mapped to block 0 (space)
pub const ASCII_OFFSET: i64 = 32;

// ============================================================================
// Input Handling
// ============================================================================

/// Escaped line break as typed into a single-line field (backslash + n)
pub const ESCAPED_LINE_BREAK: &str = "\\n";

// ============================================================================
// Resources
// ============================================================================

/// Extension of font definition files
pub const FONT_EXTENSION: &str = "txt";

/// Default banner when none is requested
pub const DEFAULT_BANNER: &str = "standard";

/// Default font resource root (relative to the working directory)
pub const DEFAULT_BANNER_DIR: &str = "banners";

/// Default output root for file mode (relative to the working directory)
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Absolute line index of `row` (1-based) inside the block for `code`.
///
/// Signed so that codes below the offset produce negative indices
/// instead of wrapping.
#[inline]
pub const fn glyph_line_index(code: u8, row: usize) -> i64 {
    (code as i64 - ASCII_OFFSET) * GLYPH_BLOCK_SIZE as i64 + row as i64
}
