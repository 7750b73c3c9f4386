//! Configuration file management
//!
//! Loads TOML configuration files and provides application settings.
//! Default config path: ~/.config/glyphbanner/config.toml

use crate::constants::{DEFAULT_BANNER, DEFAULT_BANNER_DIR, DEFAULT_OUTPUT_DIR};
use anyhow::{bail, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "GLYPHBANNER_CONFIG";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path settings
    pub paths: PathConfig,
    /// Render defaults
    pub render: RenderDefaults,
}

/// Path settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Directory holding `<banner>.txt` font definitions
    pub banner_dir: PathBuf,
    /// Root directory for file-mode output
    pub output_dir: PathBuf,
}

/// Render defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    /// Banner used when none is given on the command line
    pub banner: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            banner_dir: PathBuf::from(DEFAULT_BANNER_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl Config {
    /// System-wide config path
    const SYSTEM_CONFIG_PATH: &'static str = "/etc/glyphbanner/config.toml";

    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. GLYPHBANNER_CONFIG environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
            warn!("{} points to missing file: {}", CONFIG_ENV, path);
        }

        // 2. User config: ~/.config/glyphbanner/config.toml
        if let Some(config_path) = Self::user_config_path() {
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // 3. System config
        let system_config = Path::new(Self::SYSTEM_CONFIG_PATH);
        if system_config.exists() {
            return Some(system_config.to_path_buf());
        }

        None
    }

    /// ~/.config/glyphbanner/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glyphbanner").join("config.toml"))
    }

    /// Load configuration with priority:
    /// 1. GLYPHBANNER_CONFIG environment variable
    /// 2. ~/.config/glyphbanner/config.toml (user config)
    /// 3. /etc/glyphbanner/config.toml (system config)
    /// 4. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Render this config as a commented TOML document
    pub fn to_toml(&self) -> Result<String> {
        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        Ok(format!(
            "# glyphbanner configuration file\n\
             #\n\
             # Relative paths are resolved against the working directory.\n\
             # Font files are looked up as <banner_dir>/<banner>.txt\n\n{}",
            body
        ))
    }

    /// Write the default config to `path`, refusing to overwrite unless `force`
    pub fn write_default_config_to(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        info!("Config written: {}", path.display());
        Ok(())
    }

    /// Write the default config to the user config path
    pub fn write_default_config(force: bool) -> Result<PathBuf> {
        let path = Self::user_config_path().context("Could not determine config directory")?;
        Self::write_default_config_to(&path, force)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [paths]
            output_dir = "/tmp/art"
            "#,
        )
        .unwrap();
        assert_eq!(config.paths.output_dir, PathBuf::from("/tmp/art"));
        assert_eq!(config.paths.banner_dir, PathBuf::from(DEFAULT_BANNER_DIR));
        assert_eq!(config.render.banner, DEFAULT_BANNER);
    }

    #[test]
    fn test_load_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::load_from_file(&missing).is_err());

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[paths\n").unwrap();
        let err = Config::load_from_file(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_write_default_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyphbanner").join("config.toml");

        Config::write_default_config_to(&path, false).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());

        // refuses to clobber without force
        assert!(Config::write_default_config_to(&path, false).is_err());
        Config::write_default_config_to(&path, true).unwrap();
    }
}
