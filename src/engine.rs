//! Render entry point
//!
//! Ties font loading to the compositor with explicit paths, so callers
//! (and tests) choose where fonts come from and where file output lands.

use crate::config::PathConfig;
use crate::error::Result;
use crate::font::FontLoader;
use crate::render::{self, RenderConfig, RenderedOutput};
use log::debug;
use std::collections::HashMap;

/// Banner renderer bound to a font root and an output root
#[derive(Debug, Clone)]
pub struct Engine {
    loader: FontLoader,
    paths: PathConfig,
}

impl Engine {
    pub fn new(paths: PathConfig) -> Self {
        Self {
            loader: FontLoader::new(paths.banner_dir.clone()),
            paths,
        }
    }

    pub fn paths(&self) -> &PathConfig {
        &self.paths
    }

    /// Render `text` with `banner`, routed by the `output` flag.
    ///
    /// The font is loaded before anything is composed, so a missing banner
    /// produces no output at all.
    pub fn render(
        &self,
        text: &str,
        banner: &str,
        flags: &HashMap<String, String>,
    ) -> Result<RenderedOutput> {
        let table = self.loader.load(banner)?;
        let config = RenderConfig::from_flags(flags);
        debug!(
            "Rendering {} bytes with banner {} ({})",
            text.len(),
            banner,
            match &config.output {
                Some(name) => format!("file {}", name),
                None => "memory".to_string(),
            }
        );
        render::render(text, &table, &config, &self.paths.output_dir)
    }

    /// Composed banner text; empty when the rows went to a file
    pub fn handle_ascii_art(
        &self,
        text: &str,
        banner: &str,
        flags: &HashMap<String, String>,
    ) -> Result<String> {
        self.render(text, banner, flags).map(RenderedOutput::into_text)
    }

    /// Empty an output file ahead of a render
    pub fn truncate_output(&self, name: &str) -> Result<bool> {
        render::truncate_output(&self.paths.output_dir, name)
    }

    /// Banners available under the font root
    pub fn available_banners(&self) -> Result<Vec<String>> {
        self.loader.available()
    }
}
