//! Project configuration (mkcolors.yaml) parsing.
//!
//! The config file supplies defaults for the build command; command-line
//! flags always win over it.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::generate::Format;

/// Name of the optional per-project config file.
pub const CONFIG_FILENAME: &str = "mkcolors.yaml";

/// Configuration loaded from mkcolors.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (`android`, `assets`, or `html`).
    pub format: Option<Format>,

    /// Default prefix for emitted color names.
    pub prefix: Option<String>,

    /// Default output path.
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load config from a directory, returning defaults when no
    /// mkcolors.yaml is present.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }
}
