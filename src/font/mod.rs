//! Banner fonts
//!
//! Handles:
//! - Resolving banner identifiers to font definition files
//! - Loading the flat glyph line table

pub mod loader;
pub mod table;

pub use loader::FontLoader;
pub use table::GlyphTable;
