//! Banner font resolution and loading
//!
//! Resolves a banner identifier to `<banner_dir>/<identifier>.txt` and
//! reads it into a [`GlyphTable`].

use crate::constants::FONT_EXTENSION;
use crate::error::{BannerError, Result};
use crate::font::table::GlyphTable;
use log::{debug, info};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Loads font definitions from a fixed resource root
#[derive(Debug, Clone)]
pub struct FontLoader {
    banner_dir: PathBuf,
}

impl FontLoader {
    pub fn new(banner_dir: impl Into<PathBuf>) -> Self {
        Self {
            banner_dir: banner_dir.into(),
        }
    }

    /// Path of the font file for `banner` (existence not checked)
    pub fn resolve(&self, banner: &str) -> PathBuf {
        self.banner_dir.join(format!("{}.{}", banner, FONT_EXTENSION))
    }

    /// Read and parse the font file for `banner`
    pub fn load(&self, banner: &str) -> Result<GlyphTable> {
        let path = self.resolve(banner);
        let text = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BannerError::ResourceNotFound {
                banner: banner.to_string(),
                path: path.clone(),
            },
            _ => BannerError::Io {
                path: path.clone(),
                source: e,
            },
        })?;

        let table = GlyphTable::from_text(&text);
        info!(
            "Loaded banner {}: {} ({} lines)",
            banner,
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// Sorted identifiers of all font files under the resource root
    pub fn available(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.banner_dir).map_err(|e| BannerError::Io {
            path: self.banner_dir.clone(),
            source: e,
        })?;

        let mut banners: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file())
            .filter(|p| p.extension().is_some_and(|ext| ext == FONT_EXTENSION))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        banners.sort();

        debug!(
            "Found {} banners in {}",
            banners.len(),
            self.banner_dir.display()
        );
        Ok(banners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_resolve() {
        let loader = FontLoader::new("fonts");
        assert_eq!(
            loader.resolve("shadow"),
            Path::new("fonts").join("shadow.txt")
        );
    }

    #[test]
    fn test_load_normalizes_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("crlf.txt"), "\r\n a\r\n b\r\n").unwrap();

        let table = FontLoader::new(dir.path()).load("crlf").unwrap();
        assert_eq!(table, GlyphTable::from_text("\n a\n b\n"));
    }

    #[test]
    fn test_missing_banner_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = FontLoader::new(dir.path()).load("nope").unwrap_err();
        match err {
            BannerError::ResourceNotFound { banner, path } => {
                assert_eq!(banner, "nope");
                assert_eq!(path, dir.path().join("nope.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unreadable_banner_is_io() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be
        fs::create_dir(dir.path().join("dir.txt")).unwrap();
        let err = FontLoader::new(dir.path()).load("dir").unwrap_err();
        assert!(matches!(err, BannerError::Io { .. }));
    }

    #[test]
    fn test_available_lists_font_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("thinkertoy.txt"), "").unwrap();
        fs::write(dir.path().join("standard.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        fs::create_dir(dir.path().join("shadow.txt.d")).unwrap();

        let banners = FontLoader::new(dir.path()).available().unwrap();
        assert_eq!(banners, vec!["standard", "thinkertoy"]);
    }

    #[test]
    fn test_available_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FontLoader::new(dir.path().join("missing"));
        assert!(matches!(loader.available(), Err(BannerError::Io { .. })));
    }
}
