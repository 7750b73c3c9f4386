//! Utility functions shared across glyphbanner
//!
//! Common helpers that don't fit in specialized modules.

pub mod color;

pub use color::{colorize, parse_color, parse_hex_color, Rgb};
