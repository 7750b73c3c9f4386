//! Error types for banner rendering

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a banner or writing rendered rows.
#[derive(Debug, Error)]
pub enum BannerError {
    /// No font definition file exists for the banner.
    #[error("Banner \"{banner}\" not found: {}", .path.display())]
    ResourceNotFound { banner: String, path: PathBuf },

    /// Font definition or banner directory could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory or file could not be created, opened or written.
    #[error("Failed to write output {}: {source}", .path.display())]
    SinkIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BannerError>;
