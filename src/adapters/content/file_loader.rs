//! File-backed content loader.
//!
//! Reads authored content and saved state from disk. The format is chosen
//! by extension: `.yaml` / `.yml` are parsed as YAML, everything else as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::domain::content::ContentConfig;

/// Errors raised while loading content or state files.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Loads content configuration and saved state from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFileLoader;

impl ContentFileLoader {
    pub fn new() -> Self {
        Self
    }

    /// Loads authored content.
    pub fn load_content(&self, path: impl AsRef<Path>) -> Result<ContentConfig, ContentLoadError> {
        self.load(path.as_ref())
    }

    /// Loads a previous-state payload as untyped JSON.
    ///
    /// The payload is left untyped so the explorer can drop malformed
    /// entries instead of rejecting the whole file.
    pub fn load_state(&self, path: impl AsRef<Path>) -> Result<serde_json::Value, ContentLoadError> {
        self.load(path.as_ref())
    }

    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T, ContentLoadError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = FileFormat::from_path(path);
        debug!(path = %path.display(), format = ?format, "Loading file");

        match format {
            FileFormat::Json => serde_json::from_str(&raw).map_err(|source| ContentLoadError::Json {
                path: path.to_path_buf(),
                source,
            }),
            FileFormat::Yaml => serde_yaml::from_str(&raw).map_err(|source| ContentLoadError::Yaml {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
