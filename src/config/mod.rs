//! Rendering configuration for tree dumps.
//!
//! The default configuration reproduces the canonical `Display` output of a
//! node exactly. Tools that print trees for humans can load a TOML file to
//! widen the indentation or show source locations next to each path.
//!
//! # Example
//!
//! ```
//! use yamlnode::config::RenderConfig;
//!
//! let config = RenderConfig::default();
//! assert_eq!(config.indent_size, 2);
//! assert!(!config.show_locations);
//!
//! let custom = RenderConfig {
//!     show_locations: true,
//!     ..RenderConfig::default()
//! };
//! assert_eq!(custom.indent_size, 2);
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Settings for [`render_tree`](crate::document::render::render_tree).
///
/// # Fields
///
/// * `indent_size` - Spaces per nesting level (default: 2)
/// * `show_locations` - Print `(line L, column C)` after each path (default: false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Spaces per nesting level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Print the source location after each path
    #[serde(default)]
    pub show_locations: bool,
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            show_locations: false,
        }
    }
}

impl RenderConfig {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlnode/render.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlnode");
            path.push("render.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(config_path) => Self::load_or_default(config_path),
            None => {
                tracing::debug!("no home directory, using default render config");
                Self::default()
            }
        }
    }

    /// Loads configuration from `path`, falling back to the defaults when the
    /// file is missing, unreadable or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no render config, using defaults");
            return Self::default();
        }

        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(err) => {
                let error = format!("{err:#}");
                tracing::warn!(path = %path.display(), %error, "ignoring render config");
                Self::default()
            }
        }
    }

    /// Loads configuration from a TOML file. Missing fields take their defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }

    /// Saves configuration to a TOML file, creating parent directories.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
