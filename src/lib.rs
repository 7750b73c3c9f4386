//! glyphbanner - glyph-table driven text banners
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Engine (text, banner, flags)            │
//! ├──────────────────────────────────────────┤
//! │  FontLoader  →  GlyphTable               │
//! │                     ↓                    │
//! │  Compositor (split → rows 1..=8)         │
//! │                     ↓                    │
//! │  TextAccumulator  |  FileSink (append)   │
//! └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod font;
pub mod render;
pub mod utils;

pub use engine::Engine;
pub use error::{BannerError, Result};
pub use font::{FontLoader, GlyphTable};
pub use render::{RenderConfig, RenderedOutput};
